#[cfg(test)]
#[path = "../../tests/unit/reports/hypervolume_test.rs"]
mod hypervolume_test;

use super::NamedSolutionSet;
use crate::algorithms::indicators::HypervolumeCalculator;
use crate::models::{DataQualityIssue, ObjectiveVector};
use crate::utils::{Float, parallel_collect};
use serde::Serialize;

/// Hypervolume of one algorithm.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HypervolumeRow {
    /// Algorithm name.
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    /// Normalized hypervolume.
    #[serde(rename = "Hypervolume")]
    pub hypervolume: Float,
    /// Hypervolume in original objective space.
    #[serde(rename = "RawHypervolume")]
    pub raw_hypervolume: Float,
    /// Amount of solutions.
    #[serde(rename = "SolutionCount")]
    pub solution_count: usize,
    /// Data quality issues of both calculations.
    #[serde(skip)]
    pub issues: Vec<DataQualityIssue>,
}

impl HypervolumeRow {
    /// Returns true if solution set was empty.
    pub fn is_empty(&self) -> bool {
        self.solution_count == 0
    }
}

/// Calculates raw and normalized hypervolume of every algorithm in parallel using the same
/// reference point. Result order follows the input.
pub fn evaluate_all(
    sets: &[NamedSolutionSet],
    calculator: &HypervolumeCalculator,
    reference: &ObjectiveVector,
) -> Vec<HypervolumeRow> {
    parallel_collect(sets, |set| evaluate_one(set, calculator, reference))
}

/// Calculates raw and normalized hypervolume of one algorithm.
pub fn evaluate_one(
    set: &NamedSolutionSet,
    calculator: &HypervolumeCalculator,
    reference: &ObjectiveVector,
) -> HypervolumeRow {
    if set.solutions.is_empty() {
        return HypervolumeRow {
            algorithm: set.name.clone(),
            hypervolume: 0.,
            raw_hypervolume: 0.,
            solution_count: 0,
            issues: vec![DataQualityIssue::EmptySolutionSet],
        };
    }

    let raw = calculator.raw(set.solutions.as_slice(), reference);
    let normalized = calculator.normalized(set.solutions.as_slice(), reference);

    let mut issues = raw.issues;
    normalized.issues.into_iter().for_each(|issue| {
        if !issues.contains(&issue) {
            issues.push(issue);
        }
    });

    HypervolumeRow {
        algorithm: set.name.clone(),
        hypervolume: normalized.value,
        raw_hypervolume: raw.value,
        solution_count: set.solutions.len(),
        issues,
    }
}
