//! Contains extensions built on top of the indicator engine.

pub mod import;
pub mod metrics;
pub mod report;

use tourmo_core::prelude::GenericError;

pub(crate) fn map_csv_error(err: csv::Error) -> GenericError {
    format!("csv error: '{err}'").into()
}
