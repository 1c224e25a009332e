#[cfg(test)]
#[path = "../../tests/unit/reports/coverage_test.rs"]
mod coverage_test;

use super::NamedSolutionSet;
use crate::algorithms::dominance::extract_non_dominated_front;
use crate::algorithms::indicators::{CoverageTier, coverage};
use crate::utils::{Float, InfoLogger, parallel_collect, parallel_into_collect};
use serde::Serialize;

/// Binary coverage of one ordered algorithm pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoverageRow {
    /// Name of algorithm A.
    #[serde(rename = "Algorithm_A")]
    pub algorithm_a: String,
    /// Name of algorithm B.
    #[serde(rename = "Algorithm_B")]
    pub algorithm_b: String,
    /// Coverage `C(A, B)`.
    #[serde(rename = "Coverage_A_B")]
    pub coverage_a_b: Float,
    /// Size of non-dominated front of A.
    #[serde(rename = "Solutions_A")]
    pub solutions_a: usize,
    /// Size of non-dominated front of B.
    #[serde(rename = "Solutions_B")]
    pub solutions_b: usize,
    /// Explains why coverage was not calculated.
    #[serde(skip)]
    pub note: Option<String>,
}

impl CoverageRow {
    /// Returns qualitative band of coverage.
    pub fn tier(&self) -> CoverageTier {
        CoverageTier::from_value(self.coverage_a_b)
    }

    /// Returns human readable interpretation of coverage.
    pub fn interpretation(&self) -> String {
        self.tier().interpret(self.algorithm_a.as_str(), self.algorithm_b.as_str())
    }
}

/// Calculates binary coverage for every ordered pair of distinct algorithms. Every solution set is
/// reduced to its non-dominated front first, so the metric measures front quality rather than
/// amount of produced solutions. Pairs are evaluated in parallel, result order follows the input.
pub fn compare_all_pairs(sets: &[NamedSolutionSet], logger: &InfoLogger) -> Vec<CoverageRow> {
    let fronts = parallel_collect(sets, |set| {
        NamedSolutionSet::new(set.name.clone(), extract_non_dominated_front(set.solutions.as_slice()))
    });

    sets.iter().zip(fronts.iter()).for_each(|(set, front)| {
        (logger)(&format!(
            "{}: {} solutions filtered to {} non-dominated solutions",
            set.name,
            set.solutions.len(),
            front.solutions.len()
        ))
    });

    let pairs = (0..fronts.len())
        .flat_map(|a_idx| (0..fronts.len()).filter(move |&b_idx| b_idx != a_idx).map(move |b_idx| (a_idx, b_idx)))
        .collect::<Vec<_>>();

    let rows = parallel_into_collect(pairs, |(a_idx, b_idx)| create_coverage_row(&fronts[a_idx], &fronts[b_idx]));

    rows.iter().for_each(|row| match &row.note {
        Some(note) => (logger)(&format!("C({}, {}) = 0: {note}", row.algorithm_a, row.algorithm_b)),
        None => (logger)(&format!(
            "C({}, {}) = {:.4}: {:.2}% of {}'s solutions are weakly dominated by at least one solution from {}",
            row.algorithm_a,
            row.algorithm_b,
            row.coverage_a_b,
            row.coverage_a_b * 100.,
            row.algorithm_b,
            row.algorithm_a
        )),
    });

    rows
}

/// Creates a coverage row for fronts of two algorithms.
pub fn create_coverage_row(front_a: &NamedSolutionSet, front_b: &NamedSolutionSet) -> CoverageRow {
    let empty_names = [front_a, front_b]
        .into_iter()
        .filter(|front| front.solutions.is_empty())
        .map(|front| front.name.as_str())
        .collect::<Vec<_>>();

    let (coverage_a_b, note) = if empty_names.is_empty() {
        (coverage(front_a.solutions.as_slice(), front_b.solutions.as_slice()), None)
    } else {
        (0., Some(format!("empty solution set of {}", empty_names.join(" and "))))
    };

    CoverageRow {
        algorithm_a: front_a.name.clone(),
        algorithm_b: front_b.name.clone(),
        coverage_a_b,
        solutions_a: front_a.solutions.len(),
        solutions_b: front_b.solutions.len(),
        note,
    }
}
