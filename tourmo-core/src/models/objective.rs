#[cfg(test)]
#[path = "../../tests/unit/models/objective_test.rs"]
mod objective_test;

use crate::utils::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Amount of objectives used to evaluate an itinerary.
pub const OBJECTIVE_COUNT: usize = 4;

/// Index of the total cost objective.
pub const COST_IDX: usize = 0;
/// Index of the total time objective.
pub const TIME_IDX: usize = 1;
/// Index of the (negated) amount of visited attractions.
pub const ATTRACTIONS_IDX: usize = 2;
/// Index of the (negated) amount of visited neighborhoods.
pub const NEIGHBORHOODS_IDX: usize = 3;

/// Objective names in the order they are stored inside [`ObjectiveVector`].
pub const OBJECTIVE_NAMES: [&str; OBJECTIVE_COUNT] = ["cost", "time", "attractions", "neighborhoods"];

/// An objective vector of a single itinerary: `[cost, time, -attractions, -neighborhoods]`.
///
/// Lower is better for every component: the maximized counts are kept negated, so dominance and
/// hypervolume never need to know optimization direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveVector([Float; OBJECTIVE_COUNT]);

/// A collection of objective vectors produced by one optimization run.
pub type SolutionSet = Vec<ObjectiveVector>;

impl ObjectiveVector {
    /// Creates a new instance from values which are already in "lower is better" encoding.
    pub fn new(values: [Float; OBJECTIVE_COUNT]) -> Self {
        Self(values)
    }

    /// Creates a new instance from natural values where attractions and neighborhoods are
    /// positive counts.
    pub fn from_counts(cost: Float, time: Float, attractions: Float, neighborhoods: Float) -> Self {
        Self([cost, time, -attractions, -neighborhoods])
    }

    /// Returns total cost.
    pub fn cost(&self) -> Float {
        self.0[COST_IDX]
    }

    /// Returns total time.
    pub fn time(&self) -> Float {
        self.0[TIME_IDX]
    }

    /// Returns amount of visited attractions as a positive count.
    pub fn attractions(&self) -> Float {
        -self.0[ATTRACTIONS_IDX]
    }

    /// Returns amount of visited neighborhoods as a positive count.
    pub fn neighborhoods(&self) -> Float {
        -self.0[NEIGHBORHOODS_IDX]
    }

    /// Returns stored values.
    pub fn values(&self) -> &[Float; OBJECTIVE_COUNT] {
        &self.0
    }

    /// Returns stored values as a slice.
    pub fn as_slice(&self) -> &[Float] {
        self.0.as_slice()
    }

    /// Applies `map_fn` to every component together with its index.
    pub fn map<F>(&self, map_fn: F) -> Self
    where
        F: Fn(usize, Float) -> Float,
    {
        Self(std::array::from_fn(|idx| map_fn(idx, self.0[idx])))
    }

    /// Returns true if all components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|value| value.is_finite())
    }
}

impl AsRef<[Float]> for ObjectiveVector {
    fn as_ref(&self) -> &[Float] {
        self.as_slice()
    }
}

impl From<[Float; OBJECTIVE_COUNT]> for ObjectiveVector {
    fn from(values: [Float; OBJECTIVE_COUNT]) -> Self {
        Self::new(values)
    }
}

impl Display for ObjectiveVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [cost, time, attractions, neighborhoods] = self.0;
        write!(f, "[{cost}, {time}, {attractions}, {neighborhoods}]")
    }
}
