//! Runs quality indicators on loaded solution sets.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/metrics/metrics_test.rs"]
mod metrics_test;

use tourmo_core::prelude::*;
use tourmo_core::reports::{compare_all_pairs, evaluate_all};

/// Hypervolume of several algorithms together with settings used to calculate it.
pub struct HypervolumeMetrics {
    /// Theoretical bounds used for normalization.
    pub bounds: ObjectiveBounds,
    /// Reference point shared by all algorithms.
    pub reference: ObjectiveVector,
    /// Per algorithm results.
    pub rows: Vec<HypervolumeRow>,
}

/// Calculates binary coverage of every ordered pair of algorithms.
pub fn get_coverage_metrics(sets: &[NamedSolutionSet], logger: &InfoLogger) -> GenericResult<Vec<CoverageRow>> {
    if sets.len() < 2 {
        return Err(format!("binary coverage requires at least two solution sets, found {}", sets.len()).into());
    }

    Ok(compare_all_pairs(sets, logger))
}

/// Calculates raw and normalized hypervolume of every algorithm using reference point derived from bounds.
pub fn get_hypervolume_metrics(
    sets: &[NamedSolutionSet],
    bounds: ObjectiveBounds,
    logger: InfoLogger,
) -> GenericResult<HypervolumeMetrics> {
    if sets.is_empty() {
        return Err("hypervolume requires at least one solution set".into());
    }

    bounds.validate()?;

    let calculator = HypervolumeCalculator::new(bounds, logger.clone());
    let reference = calculator.reference_point();
    (logger)(&format!("using reference point {reference}"));

    let rows = evaluate_all(sets, &calculator, &reference);

    rows.iter().filter(|row| row.is_empty()).for_each(|row| {
        (logger)(&format!("skipping hypervolume calculation for {} due to empty solution set", row.algorithm))
    });

    Ok(HypervolumeMetrics { bounds: calculator.bounds().clone(), reference, rows })
}
