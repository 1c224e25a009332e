//! This crate contains the quality indicators used to compare approximation sets produced by
//! multi-objective itinerary optimizers: Pareto dominance, non-dominated front extraction,
//! binary coverage (C-metric) and hypervolume (HSO) in raw and normalized forms.
//!
//! Every objective vector follows a "lower is better" encoding: cost and time are kept as is,
//! while the maximized counts (attractions, neighborhoods) are stored negated.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod reports;
pub mod utils;
