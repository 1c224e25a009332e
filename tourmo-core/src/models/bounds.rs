//! Theoretical bounds of the itinerary problem used for normalization and reference point placement.

#[cfg(test)]
#[path = "../../tests/unit/models/bounds_test.rs"]
mod bounds_test;

use crate::models::{OBJECTIVE_COUNT, ObjectiveVector};
use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A value used for a reference point component when its normalization range is degenerate.
/// It places the reference outside of the unit hypercube, so some volume is still measurable.
pub const DEGENERATE_REFERENCE_VALUE: Float = 1.1;

/// Objective values in natural units: counts are positive here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveValues {
    /// Total cost.
    pub cost: Float,
    /// Total time in minutes.
    pub time: Float,
    /// Amount of visited attractions.
    pub attractions: Float,
    /// Amount of visited neighborhoods.
    pub neighborhoods: Float,
}

impl ObjectiveValues {
    /// Converts to an objective vector in "lower is better" encoding.
    pub fn to_vector(&self) -> ObjectiveVector {
        ObjectiveVector::from_counts(self.cost, self.time, self.attractions, self.neighborhoods)
    }
}

/// Specifies how the reference point is placed relative to the nadir point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceFactors {
    /// A factor applied to minimized objectives (cost, time). Default is 1.1.
    pub minimized: Float,
    /// A factor applied to maximized objectives (attractions, neighborhoods). Default is 0.9.
    pub maximized: Float,
}

impl Default for ReferenceFactors {
    fn default() -> Self {
        Self { minimized: 1.1, maximized: 0.9 }
    }
}

/// Theoretical bounds of the problem domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveBounds {
    /// Best possible values.
    pub ideal: ObjectiveValues,
    /// Worst acceptable values.
    pub nadir: ObjectiveValues,
    /// Reference point placement.
    #[serde(default)]
    pub reference: ReferenceFactors,
}

impl Default for ObjectiveBounds {
    fn default() -> Self {
        Self {
            ideal: ObjectiveValues { cost: 0., time: 60., attractions: 10., neighborhoods: 10. },
            nadir: ObjectiveValues { cost: 500., time: 840., attractions: 1., neighborhoods: 1. },
            reference: ReferenceFactors::default(),
        }
    }
}

impl ObjectiveBounds {
    /// Returns ideal point in "lower is better" encoding.
    pub fn ideal_point(&self) -> ObjectiveVector {
        self.ideal.to_vector()
    }

    /// Returns nadir point in "lower is better" encoding.
    pub fn nadir_point(&self) -> ObjectiveVector {
        self.nadir.to_vector()
    }

    /// Returns a reference point which is slightly worse than nadir in every objective.
    pub fn reference_point(&self) -> ObjectiveVector {
        let ReferenceFactors { minimized, maximized } = self.reference;

        ObjectiveVector::from_counts(
            self.nadir.cost * minimized,
            self.nadir.time * minimized,
            self.nadir.attractions * maximized,
            self.nadir.neighborhoods * maximized,
        )
    }

    /// Checks that bounds are consistent: ideal is not worse than nadir and factors make
    /// reference point worse than nadir.
    pub fn validate(&self) -> GenericResult<()> {
        let ideal = self.ideal_point();
        let nadir = self.nadir_point();

        let mut errors = (0..OBJECTIVE_COUNT)
            .filter(|&idx| !ideal.values()[idx].is_finite() || !nadir.values()[idx].is_finite())
            .map(|idx| format!("bound of objective '{}' is not finite", crate::models::OBJECTIVE_NAMES[idx]))
            .collect::<Vec<_>>();

        errors.extend(
            (0..OBJECTIVE_COUNT)
                .filter(|&idx| ideal.values()[idx] > nadir.values()[idx])
                .map(|idx| format!("ideal of objective '{}' is worse than nadir", crate::models::OBJECTIVE_NAMES[idx])),
        );

        let ReferenceFactors { minimized, maximized } = self.reference;
        if minimized < 1. {
            errors.push(format!("minimized reference factor should be not less than 1, got {minimized}"));
        }
        if !(0. ..=1.).contains(&maximized) {
            errors.push(format!("maximized reference factor should be in [0, 1], got {maximized}"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors.join(", ").into()) }
    }
}

/// Reads bounds configuration from json.
pub fn read_bounds_config<R: Read>(reader: BufReader<R>) -> GenericResult<ObjectiveBounds> {
    let bounds: ObjectiveBounds =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize bounds config: '{err}'"))?;

    bounds.validate().map_err(|err| format!("invalid bounds config: {err}"))?;

    Ok(bounds)
}
