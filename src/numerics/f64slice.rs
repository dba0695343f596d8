use tracing::debug;

use crate::numerics::error::{MetricsError, Result};

/// Squared Euclidean distance between two vectors:
///
/// ```text
/// L2^2(x, y) = Σ_i (x[i] - y[i]) ** 2
/// ```
///
/// The sum is accumulated sequentially in ascending index order, without any
/// compensation, so the result is reproducible bit-for-bit against a plain loop.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
#[inline]
#[must_use]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Length mismatch: {} != {}", a.len(), b.len());

    // fold from +0.0: `Sum` for floats starts at -0.0
    a.iter().zip(b).fold(0.0, |acc, (x, y)| {
        let d = x - y;
        acc + d * d
    })
}

/// Dot product of two vectors: `Σ_i x[i] * y[i]`, accumulated in ascending
/// index order. Returns `0.0` for empty vectors.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
#[inline]
#[must_use]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Length mismatch: {} != {}", a.len(), b.len());

    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}

/// Same as [`squared_distance`], but reports a length mismatch instead of panicking.
pub fn try_squared_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    MetricsError::check_same_len(a.len(), b.len())
        .inspect_err(|e| debug!(error = %e, "rejected squared distance"))?;
    Ok(squared_distance(a, b))
}

/// Same as [`dot_product`], but reports a length mismatch instead of panicking.
pub fn try_dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    MetricsError::check_same_len(a.len(), b.len())
        .inspect_err(|e| debug!(error = %e, "rejected dot product"))?;
    Ok(dot_product(a, b))
}

/// A trait for vector‐like slices of `f64`, supporting the common metric
/// operations (dot product, L2 distance, norm). Exists so the operations read as
/// methods on the stdlib `[f64]` type.
///
/// # Contract
///
/// - Operations involving two vectors (l2, dot product) require that they have the same length.
pub trait VectorLike {
    fn l2_squared(&self, othr: &Self) -> f64;
    fn l2(&self, othr: &Self) -> f64;
    fn dot(&self, othr: &Self) -> f64;
    fn norm(&self) -> f64;
    fn approx_eq(&self, othr: &Self, eps: f64) -> bool;
}

impl VectorLike for [f64] {
    /// # Usage
    /// Computes the **SQUARED** L2 distance between two vectors.
    ///
    /// This is typically useful when comparing two distances :
    ///
    /// dist(u,v) < dist(w, x) ⇔ dist(u,v) ** 2 < dist(w,x) ** 2
    ///
    /// The right side skips a square root per comparison.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different lengths
    #[inline]
    fn l2_squared(&self, othr: &[f64]) -> f64 {
        squared_distance(self, othr)
    }

    /// # Usage
    /// Computes the L2 distance between two vectors.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different lengths
    #[inline]
    fn l2(&self, othr: &[f64]) -> f64 {
        self.l2_squared(othr).sqrt()
    }

    #[inline]
    fn dot(&self, othr: &[f64]) -> f64 {
        dot_product(self, othr)
    }

    /// Euclidean length of the vector.
    #[inline]
    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Element-wise comparison within `eps`. Vectors of different lengths are
    /// never equal, and a NaN on either side fails the comparison.
    fn approx_eq(&self, othr: &[f64], eps: f64) -> bool {
        self.len() == othr.len() && self.iter().zip(othr).all(|(a, b)| (a - b).abs() <= eps)
    }
}
