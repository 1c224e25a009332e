use crate::models::OBJECTIVE_NAMES;
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Describes a data quality problem noticed while calculating an indicator. Such problems never
/// abort a calculation, but they are reported so that wrong inputs do not go unnoticed.
#[derive(Clone, Debug, PartialEq)]
pub enum DataQualityIssue {
    /// Indicator was evaluated on an empty solution set, its value is 0 by convention.
    EmptySolutionSet,

    /// Some points do not weakly dominate the reference point and were excluded.
    ExcludedPoints {
        /// Amount of excluded points.
        excluded: usize,
        /// Total amount of points.
        total: usize,
    },

    /// No point weakly dominates the reference point, so it was chosen incorrectly relative to data.
    ReferenceNotDominated {
        /// A reference point used.
        reference: Vec<Float>,
    },

    /// A slice of negative height was met during hypervolume sweep.
    NegativeSliceHeight {
        /// Amount of remaining dimensions when the slice was met.
        dimensions: usize,
        /// Slice height.
        height: Float,
    },

    /// Observed range of an objective is empty, so normalization fallback was used.
    DegenerateRange {
        /// Objective index.
        objective: usize,
    },

    /// A point has a non finite component.
    NonFiniteValue {
        /// Point with non finite component.
        point: Vec<Float>,
    },

    /// A point has a different amount of components than the reference point.
    DimensionMismatch {
        /// Point with unexpected amount of components.
        point: Vec<Float>,
        /// Amount of components of the reference point.
        expected: usize,
    },

    /// Every contributing point coincides with the reference in this objective, so it has no
    /// extent and is left out of the measured volume.
    ZeroExtent {
        /// Objective index.
        objective: usize,
    },
}

impl DataQualityIssue {
    /// Returns true if issue signals an inconsistency between data and reference point.
    pub fn is_inconsistency(&self) -> bool {
        matches!(
            self,
            DataQualityIssue::ReferenceNotDominated { .. }
                | DataQualityIssue::NegativeSliceHeight { .. }
                | DataQualityIssue::NonFiniteValue { .. }
                | DataQualityIssue::DimensionMismatch { .. }
        )
    }
}

impl Display for DataQualityIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataQualityIssue::EmptySolutionSet => write!(f, "solution set is empty, indicator value is 0"),
            DataQualityIssue::ExcludedPoints { excluded, total } => {
                write!(f, "{excluded} of {total} points do not dominate the reference point and were excluded")
            }
            DataQualityIssue::ReferenceNotDominated { reference } => {
                write!(f, "reference point {reference:?} is not dominated by any point")
            }
            DataQualityIssue::NegativeSliceHeight { dimensions, height } => {
                write!(f, "negative slice height {height} at {dimensions} remaining dimensions")
            }
            DataQualityIssue::DegenerateRange { objective } => {
                write!(f, "objective '{}' has degenerate normalization range", get_objective_name(*objective))
            }
            DataQualityIssue::NonFiniteValue { point } => write!(f, "point {point:?} has non finite value"),
            DataQualityIssue::DimensionMismatch { point, expected } => {
                write!(f, "point {point:?} has {} components, expected {expected}", point.len())
            }
            DataQualityIssue::ZeroExtent { objective } => {
                write!(f, "objective '{}' has zero extent and is left out of volume", get_objective_name(*objective))
            }
        }
    }
}

fn get_objective_name(objective: usize) -> &'static str {
    OBJECTIVE_NAMES.get(objective).copied().unwrap_or("unknown")
}
