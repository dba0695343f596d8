//! Numerical kernels over `f64` vectors.
//!
//! This module provides the squared Euclidean distance and dot product reductions,
//! their length-checked counterparts, and a handful of in-place helpers that work
//! on caller-owned buffers without allocating.

mod error;
mod f64slice;
mod inplace;

pub use error::{MetricsError, Result};
pub use f64slice::{
    VectorLike, dot_product, squared_distance, try_dot_product, try_squared_distance,
};
pub use inplace::VectorMut;
