//! Work counters for metric computations.
//!
//! This module provides a small accumulator recording how many distance and dot
//! product evaluations were performed and how many vector elements they touched.
//! Each worker keeps its own instance and the results are merged afterwards.

mod stats;
pub use stats::*;
