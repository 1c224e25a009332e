//! A command line interface to quality indicators of itinerary optimization results.
//!
//! The library part keeps functionality which is not tied to command line parsing: loading of
//! result files, running indicators on them and writing metrics and reports.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
