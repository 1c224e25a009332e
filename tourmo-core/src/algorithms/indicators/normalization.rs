//! Normalization of objective vectors to `[0, 1]` following the bounds adjustment idea of
//! Wang et al. (2023): observed ideal and nadir points are widened by theoretical bounds, so that
//! values of different runs land on a comparable scale.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/indicators/normalization_test.rs"]
mod normalization_test;

use crate::models::{DEGENERATE_REFERENCE_VALUE, OBJECTIVE_COUNT, ObjectiveBounds, ObjectiveVector};
use crate::utils::Float;

/// Ideal and nadir points used to rescale one solution set.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizationBounds {
    ideal: ObjectiveVector,
    nadir: ObjectiveVector,
}

impl NormalizationBounds {
    /// Derives normalization bounds: ideal is the best of observed and theoretical ideal values,
    /// nadir is the worst of observed and theoretical nadir values.
    pub fn derive(solutions: &[ObjectiveVector], bounds: &ObjectiveBounds) -> Self {
        let observed = |idx: usize| solutions.iter().map(move |solution| solution.values()[idx]);

        let ideal = bounds.ideal_point().map(|idx, value| observed(idx).fold(value, Float::min));
        let nadir = bounds.nadir_point().map(|idx, value| observed(idx).fold(value, Float::max));

        Self { ideal, nadir }
    }

    /// Returns ideal point.
    pub fn ideal(&self) -> &ObjectiveVector {
        &self.ideal
    }

    /// Returns nadir point.
    pub fn nadir(&self) -> &ObjectiveVector {
        &self.nadir
    }

    /// Returns indices of objectives which have empty range.
    pub fn degenerate_objectives(&self) -> Vec<usize> {
        (0..OBJECTIVE_COUNT).filter(|&idx| self.range(idx) == 0.).collect()
    }

    /// Rescales a solution point, a degenerate objective is mapped to zero.
    pub fn normalize_point(&self, point: &ObjectiveVector) -> ObjectiveVector {
        self.normalize(point, 0.)
    }

    /// Rescales a reference point, a degenerate objective is mapped outside of the unit hypercube.
    pub fn normalize_reference(&self, reference: &ObjectiveVector) -> ObjectiveVector {
        self.normalize(reference, DEGENERATE_REFERENCE_VALUE)
    }

    fn normalize(&self, vector: &ObjectiveVector, fallback: Float) -> ObjectiveVector {
        vector.map(|idx, value| {
            let range = self.range(idx);
            if range == 0. { fallback } else { (value - self.ideal.values()[idx]) / range }
        })
    }

    fn range(&self, idx: usize) -> Float {
        self.nadir.values()[idx] - self.ideal.values()[idx]
    }
}
