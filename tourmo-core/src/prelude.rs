//! This module reimports a common used types.

pub use crate::algorithms::dominance::{dominates, extract_non_dominated_front, weakly_dominates};
pub use crate::algorithms::indicators::coverage;
pub use crate::algorithms::indicators::{
    HypervolumeCalculator, HypervolumeOutcome, hypervolume, normalized_hypervolume, raw_hypervolume_direct,
};

pub use crate::models::{DataQualityIssue, ObjectiveBounds, ObjectiveVector, SolutionSet};

pub use crate::reports::{CoverageRow, HypervolumeRow, NamedSolutionSet};

pub use crate::utils::{Float, GenericError, GenericResult, InfoLogger};
