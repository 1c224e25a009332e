//! Binary coverage (C-metric) as defined by Zitzler et al. (2003): the fraction of one set which
//! is weakly dominated by at least one member of another set.
//!
//! The indicator is asymmetric, so `coverage(a, b)` and `coverage(b, a)` have to be considered
//! together.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/indicators/coverage_test.rs"]
mod coverage_test;

use crate::algorithms::dominance::weakly_dominates;
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Returns the fraction of `b` weakly dominated by at least one member of `a`. An empty `b` gives 0.
pub fn coverage<T>(a: &[T], b: &[T]) -> Float
where
    T: AsRef<[Float]>,
{
    if b.is_empty() {
        return 0.;
    }

    let covered = b.iter().filter(|b_item| a.iter().any(|a_item| weakly_dominates(a_item, *b_item))).count();

    covered as Float / b.len() as Float
}

/// A qualitative band of a coverage value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageTier {
    /// Coverage above 0.75.
    Strong,
    /// Coverage above 0.5.
    Moderate,
    /// Coverage above 0.25.
    Slight,
    /// Coverage above 0.
    Partial,
    /// Zero coverage.
    Absent,
}

impl CoverageTier {
    /// Bands coverage value.
    pub fn from_value(value: Float) -> Self {
        match value {
            value if value > 0.75 => CoverageTier::Strong,
            value if value > 0.5 => CoverageTier::Moderate,
            value if value > 0.25 => CoverageTier::Slight,
            value if value > 0. => CoverageTier::Partial,
            _ => CoverageTier::Absent,
        }
    }

    /// Returns a human readable interpretation of `C(a, b)` which has this band.
    pub fn interpret(&self, a: &str, b: &str) -> String {
        match self {
            CoverageTier::Strong => format!("{a} strongly dominates {b}"),
            CoverageTier::Moderate => format!("{a} moderately dominates {b}"),
            CoverageTier::Slight => format!("{a} slightly dominates {b}"),
            CoverageTier::Partial => format!("{a} weakly dominates some solutions of {b}"),
            CoverageTier::Absent => format!("{a} does not dominate any solution of {b}"),
        }
    }
}

impl Display for CoverageTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CoverageTier::Strong => "strongly dominates",
            CoverageTier::Moderate => "moderately dominates",
            CoverageTier::Slight => "slightly dominates",
            CoverageTier::Partial => "weakly dominates some",
            CoverageTier::Absent => "does not dominate any",
        };

        write!(f, "{name}")
    }
}
