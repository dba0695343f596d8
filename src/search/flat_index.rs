use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::{search::Metric, statistics::Stats};

/// Best match found by a scan: position of the vector in the index and its
/// score under the metric used (smaller is better, see [`Metric::score`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub score: f64,
}

/// A set of equal-dimension vectors stored back to back in one buffer, queried
/// by exhaustive scan.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dim: usize,
    data: Vec<f64>,
}

impl FlatIndex {
    /// # Panics
    /// Panics if `dim` is zero or `data.len()` is not a multiple of `dim`
    pub fn new(data: Vec<f64>, dim: usize) -> Self {
        assert!(dim > 0, "dim must be positive");
        assert!(
            data.len().is_multiple_of(dim),
            "data length {} is not a multiple of dim {dim}",
            data.len()
        );
        FlatIndex { dim, data }
    }

    /// Creates `count` vectors of dimension `dim` with standard normal entries.
    /// The same seed always produces the same vectors.
    pub fn random_gaussian(count: usize, dim: usize, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        let data: Vec<f64> = rng.sample_iter(StandardNormal).take(count * dim).collect();
        Self::new(data, dim)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.data.chunks_exact(self.dim).nth(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dim)
    }

    /// Scans every stored vector and returns the one scoring lowest against
    /// `query`. Ties keep the earliest index. `None` on an empty index.
    ///
    /// # Panics
    /// Panics if `query.len()` differs from the index dimension
    pub fn best_match(&self, query: &[f64], metric: Metric, stats: &mut Stats) -> Option<Candidate> {
        assert_eq!(query.len(), self.dim);

        let mut best: Option<Candidate> = None;
        for (index, vector) in self.iter().enumerate() {
            let score = metric.score(query, vector, stats);
            if best.is_none_or(|current| score.total_cmp(&current.score).is_lt()) {
                best = Some(Candidate { index, score });
            }
        }
        best
    }
}
