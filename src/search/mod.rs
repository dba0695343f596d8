//! Exhaustive nearest-vector scans built on the numerics kernels.
//!
//! This module ranks a flat set of vectors against a query using either the
//! squared Euclidean distance or the dot product, and is what the benchmark
//! binary drives from several threads at once.

mod flat_index;
mod metric;

pub use flat_index::{Candidate, FlatIndex};
pub use metric::Metric;
