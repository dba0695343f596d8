use std::str::FromStr;

use crate::{
    numerics::{dot_product, squared_distance},
    statistics::Stats,
};

/// Which reduction ranks the vectors of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Squared Euclidean distance, smaller is closer.
    SquaredL2,
    /// Dot product, larger is closer.
    Dot,
}

impl Metric {
    /// Scores `candidate` against `query` so that a smaller score always means a
    /// better match. The dot product is negated to fit that ordering.
    #[inline]
    pub fn score(self, query: &[f64], candidate: &[f64], stats: &mut Stats) -> f64 {
        match self {
            Metric::SquaredL2 => {
                stats.bump_distance(query.len());
                squared_distance(query, candidate)
            }
            Metric::Dot => {
                stats.bump_dot(query.len());
                -dot_product(query, candidate)
            }
        }
    }

    /// Undo the sign flip of [`Metric::score`], giving back the raw metric value.
    pub fn raw_value(self, score: f64) -> f64 {
        match self {
            Metric::SquaredL2 => score,
            Metric::Dot => -score,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::SquaredL2 => "l2",
            Metric::Dot => "dot",
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l2" => Ok(Metric::SquaredL2),
            "dot" => Ok(Metric::Dot),
            other => Err(format!("Invalid metric: {other} (expected `l2` or `dot`)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("l2".parse::<Metric>(), Ok(Metric::SquaredL2));
        assert_eq!("dot".parse::<Metric>(), Ok(Metric::Dot));
        assert!("cosine".parse::<Metric>().is_err());
    }

    #[test]
    fn name_round_trips() {
        for metric in [Metric::SquaredL2, Metric::Dot] {
            assert_eq!(metric.name().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn dot_score_is_negated() {
        let mut stats = Stats::new();
        let score = Metric::Dot.score(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut stats);
        assert_eq!(score, -32.0);
        assert_eq!(Metric::Dot.raw_value(score), 32.0);
        assert_eq!(stats.get_dot_calls(), 1);
        assert_eq!(stats.get_elements_processed(), 3);
    }

    #[test]
    fn l2_score_is_squared_distance() {
        let mut stats = Stats::new();
        let score = Metric::SquaredL2.score(&[-1.0, 1.0], &[1.0, -1.0], &mut stats);
        assert_eq!(score, 8.0);
        assert_eq!(Metric::SquaredL2.raw_value(score), 8.0);
        assert_eq!(stats.get_distance_calls(), 1);
    }
}
