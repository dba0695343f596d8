use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    distance_calls: usize,
    dot_calls: usize,
    elements_processed: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            distance_calls: 0,
            dot_calls: 0,
            elements_processed: 0,
        }
    }

    /// Record that a squared distance over `dim` elements has been computed
    pub fn bump_distance(&mut self, dim: usize) {
        self.distance_calls += 1;
        self.elements_processed += dim;
    }

    /// Record that a dot product over `dim` elements has been computed
    pub fn bump_dot(&mut self, dim: usize) {
        self.dot_calls += 1;
        self.elements_processed += dim;
    }

    pub fn get_distance_calls(&self) -> usize {
        self.distance_calls
    }

    pub fn get_dot_calls(&self) -> usize {
        self.dot_calls
    }

    pub fn get_elements_processed(&self) -> usize {
        self.elements_processed
    }

    /// Total number of metric evaluations, regardless of kind.
    pub fn get_total_calls(&self) -> usize {
        self.distance_calls + self.dot_calls
    }

    /// Combine the counters of two workers into a fresh object.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            distance_calls: self.distance_calls + other.distance_calls,
            dot_calls: self.dot_calls + other.dot_calls,
            elements_processed: self.elements_processed + other.elements_processed,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
