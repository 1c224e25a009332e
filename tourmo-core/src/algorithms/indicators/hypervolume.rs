//! Implementation of the Hypervolume by Slicing Objectives (HSO) algorithm as described in
//! "A Faster Algorithm for Calculating Hypervolume" by While et al. (2006).
//!
//! The volume dominated by a set of points and bounded by a reference point is calculated by
//! slicing the space along the first objective: each slice is a `k-1` dimensional problem which
//! is solved recursively on points projected to the remaining objectives. Projections borrow
//! sub-slices of the original points, so no coordinates are copied while recursing.
//!
//! Time complexity is exponential in the amount of objectives, which is fine for four of them
//! and a few hundreds of points.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/indicators/hypervolume_test.rs"]
mod hypervolume_test;

use super::NormalizationBounds;
use crate::algorithms::dominance::{extract_non_dominated_front, weakly_dominates};
use crate::models::{DataQualityIssue, ObjectiveBounds, ObjectiveVector};
use crate::utils::{Float, InfoLogger, compare_floats};

/// Keeps result of a hypervolume calculation together with noticed data quality issues.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HypervolumeOutcome {
    /// Calculated volume, never negative.
    pub value: Float,
    /// Amount of points which weakly dominate the reference point.
    pub contributing: usize,
    /// Data quality issues noticed during calculation.
    pub issues: Vec<DataQualityIssue>,
}

impl HypervolumeOutcome {
    /// Returns true if any issue signals inconsistency between data and reference point.
    pub fn has_inconsistency(&self) -> bool {
        self.issues.iter().any(|issue| issue.is_inconsistency())
    }
}

/// Calculates hypervolume of `points` bounded by `reference`. Only points which weakly dominate
/// the reference point contribute to the volume; when there are none, the volume is zero.
/// Points with a different amount of components than the reference are excluded.
pub fn hypervolume<T>(points: &[T], reference: &T) -> Float
where
    T: AsRef<[Float]>,
{
    calculate_hypervolume(points, reference).value
}

/// Calculates hypervolume in the original (not normalized) objective space.
pub fn raw_hypervolume_direct(points: &[ObjectiveVector], reference: &ObjectiveVector) -> Float {
    calculate_hypervolume(points, reference).value
}

/// Calculates hypervolume in the objective space rescaled to `[0, 1]` using ideal and nadir
/// points derived from `points` and theoretical `bounds`.
pub fn normalized_hypervolume(
    points: &[ObjectiveVector],
    reference: &ObjectiveVector,
    bounds: &ObjectiveBounds,
) -> Float {
    calculate_normalized_hypervolume(points, reference, bounds).value
}

/// Calculates hypervolume and collects data quality issues.
pub fn calculate_hypervolume<T>(points: &[T], reference: &T) -> HypervolumeOutcome
where
    T: AsRef<[Float]>,
{
    let reference = reference.as_ref();
    let mut issues = Vec::new();

    if points.is_empty() {
        issues.push(DataQualityIssue::EmptySolutionSet);
        return HypervolumeOutcome { value: 0., contributing: 0, issues };
    }

    let (matching, mismatching): (Vec<&[Float]>, Vec<&[Float]>) =
        points.iter().map(|point| point.as_ref()).partition(|point| point.len() == reference.len());
    issues.extend(
        mismatching
            .iter()
            .map(|point| DataQualityIssue::DimensionMismatch { point: point.to_vec(), expected: reference.len() }),
    );

    let (finite, non_finite): (Vec<&[Float]>, Vec<&[Float]>) =
        matching.into_iter().partition(|point| point.iter().all(|value| value.is_finite()));
    issues.extend(non_finite.iter().map(|point| DataQualityIssue::NonFiniteValue { point: point.to_vec() }));

    let total = finite.len();
    let contributing = finite.into_iter().filter(|point| weakly_dominates(*point, reference)).collect::<Vec<_>>();

    if contributing.len() < total {
        issues.push(DataQualityIssue::ExcludedPoints { excluded: total - contributing.len(), total });
    }

    if contributing.is_empty() {
        issues.push(DataQualityIssue::ReferenceNotDominated { reference: reference.to_vec() });
        return HypervolumeOutcome { value: 0., contributing: 0, issues };
    }

    // an objective where every point coincides with the reference has no extent
    let informative = (0..reference.len())
        .filter(|&axis| contributing.iter().any(|point| point[axis] < reference[axis]))
        .collect::<Vec<_>>();
    issues.extend(
        (0..reference.len())
            .filter(|axis| !informative.contains(axis))
            .map(|objective| DataQualityIssue::ZeroExtent { objective }),
    );

    let contributing_count = contributing.len();
    let value = if informative.is_empty() {
        0.
    } else if informative.len() == reference.len() {
        slice_volume(contributing, reference, &mut issues)
    } else {
        let project = |point: &[Float]| informative.iter().map(|&axis| point[axis]).collect::<Vec<_>>();
        let projected = contributing.iter().map(|&point| project(point)).collect::<Vec<_>>();
        let reference = project(reference);

        slice_volume(projected.iter().map(|point| point.as_slice()).collect(), reference.as_slice(), &mut issues)
    };

    HypervolumeOutcome { value, contributing: contributing_count, issues }
}

/// Calculates normalized hypervolume and collects data quality issues.
pub fn calculate_normalized_hypervolume(
    points: &[ObjectiveVector],
    reference: &ObjectiveVector,
    bounds: &ObjectiveBounds,
) -> HypervolumeOutcome {
    let normalization = NormalizationBounds::derive(points, bounds);

    let normalized_points = points.iter().map(|point| normalization.normalize_point(point)).collect::<Vec<_>>();
    let normalized_reference = normalization.normalize_reference(reference);

    let mut outcome = calculate_hypervolume(normalized_points.as_slice(), &normalized_reference);
    outcome
        .issues
        .extend(normalization.degenerate_objectives().into_iter().map(|objective| DataQualityIssue::DegenerateRange {
            objective,
        }));

    outcome
}

/// Calculates volume of the space dominated by `points` (all weakly dominating `reference`).
fn slice_volume(points: Vec<&[Float]>, reference: &[Float], issues: &mut Vec<DataQualityIssue>) -> Float {
    if points.is_empty() {
        return 0.;
    }

    let dimensions = reference.len();

    if dimensions == 1 {
        let best = points.iter().map(|point| point[0]).fold(Float::INFINITY, Float::min);
        return checked_height(reference[0] - best, dimensions, issues).unwrap_or(0.);
    }

    let mut front = extract_non_dominated_front(points.as_slice());
    front.sort_by(|a, b| compare_floats(a[0], b[0]));

    let sub_reference = &reference[1..];
    let mut upper = reference[0];
    let mut volume = 0.;

    // sweep from the reference towards the best value: a slice between `boundary` and `upper`
    // is dominated only by points which are not worse than `boundary` in the first objective
    for point in front.iter().rev() {
        let boundary = point[0];

        if boundary >= reference[0] {
            continue;
        }

        let Some(height) = checked_height(upper - boundary, dimensions, issues) else {
            continue;
        };

        if height > 0. {
            let section = front.iter().filter(|other| other[0] <= boundary).map(|&other| &other[1..]).collect();
            volume += height * slice_volume(section, sub_reference, issues);
        }

        upper = boundary;
    }

    volume
}

fn checked_height(height: Float, dimensions: usize, issues: &mut Vec<DataQualityIssue>) -> Option<Float> {
    if height < 0. {
        issues.push(DataQualityIssue::NegativeSliceHeight { dimensions, height });
        None
    } else {
        Some(height)
    }
}

/// Calculates raw and normalized hypervolume using theoretical bounds of the problem.
pub struct HypervolumeCalculator {
    bounds: ObjectiveBounds,
    logger: InfoLogger,
}

impl HypervolumeCalculator {
    /// Creates a new instance of `HypervolumeCalculator`.
    pub fn new(bounds: ObjectiveBounds, logger: InfoLogger) -> Self {
        Self { bounds, logger }
    }

    /// Returns theoretical bounds used by calculator.
    pub fn bounds(&self) -> &ObjectiveBounds {
        &self.bounds
    }

    /// Returns reference point derived from nadir bounds.
    pub fn reference_point(&self) -> ObjectiveVector {
        self.bounds.reference_point()
    }

    /// Calculates hypervolume in the original objective space.
    pub fn raw(&self, solutions: &[ObjectiveVector], reference: &ObjectiveVector) -> HypervolumeOutcome {
        let outcome = calculate_hypervolume(solutions, reference);
        self.log_outcome("raw", &outcome);

        outcome
    }

    /// Calculates hypervolume in the normalized objective space.
    pub fn normalized(&self, solutions: &[ObjectiveVector], reference: &ObjectiveVector) -> HypervolumeOutcome {
        let outcome = calculate_normalized_hypervolume(solutions, reference, &self.bounds);
        self.log_outcome("normalized", &outcome);

        outcome
    }

    fn log_outcome(&self, kind: &str, outcome: &HypervolumeOutcome) {
        (self.logger)(&format!("{kind} hypervolume: {}, contributing points: {}", outcome.value, outcome.contributing));

        outcome.issues.iter().for_each(|issue| {
            let severity = if issue.is_inconsistency() { "WARNING" } else { "NOTE" };
            (self.logger)(&format!("{severity}: {kind} hypervolume: {issue}"));
        });
    }
}
