//! Import of results from a semicolon separated csv format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use crate::extensions::map_csv_error;
use ::csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::io::{BufReader, Read};
use tourmo_core::prelude::*;

/// A column with total itinerary cost.
pub const COST_COLUMN: &str = "CustoTotal";
/// A column with total itinerary time.
pub const TIME_COLUMN: &str = "TempoTotal";
/// A column with amount of visited attractions.
pub const ATTRACTIONS_COLUMN: &str = "NumAtracoes";
/// A column with amount of visited neighborhoods.
pub const NEIGHBORHOODS_COLUMN: &str = "NumBairros";

const REQUIRED_COLUMNS: [&str; 4] = [COST_COLUMN, TIME_COLUMN, ATTRACTIONS_COLUMN, NEIGHBORHOODS_COLUMN];

/// A row which was not imported.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRow {
    /// Line number in the source, header is line 1.
    pub line: u64,
    /// Why row was skipped.
    pub reason: String,
}

/// Solutions imported from one result file.
#[derive(Clone, Debug, Default)]
pub struct LoadedSolutions {
    /// Imported solutions.
    pub solutions: SolutionSet,
    /// Rows which were not imported.
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Deserialize)]
struct CsvSolution {
    #[serde(rename = "CustoTotal")]
    cost: String,
    #[serde(rename = "TempoTotal")]
    time: String,
    #[serde(rename = "NumAtracoes")]
    attractions: String,
    #[serde(rename = "NumBairros")]
    neighborhoods: String,
}

impl CsvSolution {
    fn to_vector(&self) -> Result<ObjectiveVector, String> {
        Ok(ObjectiveVector::from_counts(
            parse_value(self.cost.as_str(), COST_COLUMN)?,
            parse_value(self.time.as_str(), TIME_COLUMN)?,
            parse_value(self.attractions.as_str(), ATTRACTIONS_COLUMN)?,
            parse_value(self.neighborhoods.as_str(), NEIGHBORHOODS_COLUMN)?,
        ))
    }
}

/// Reads solutions from csv with `;` delimiter where a decimal separator can be a comma. Columns
/// are looked up by header name, other columns are ignored. A row which cannot be parsed is
/// skipped and reported, a missing required column fails the whole import.
pub fn read_csv_solutions<R: Read>(reader: BufReader<R>, logger: &InfoLogger) -> GenericResult<LoadedSolutions> {
    let mut reader = ReaderBuilder::new().delimiter(b';').flexible(true).trim(Trim::All).from_reader(reader);

    let headers = reader.headers().map_err(map_csv_error)?.clone();
    check_headers(&headers)?;

    let mut loaded = LoadedSolutions::default();

    for (idx, record) in reader.records().enumerate() {
        let (line, result) = match record {
            Ok(record) => {
                let line = record.position().map_or(idx as u64 + 2, |position| position.line());
                (line, parse_record(&record, &headers))
            }
            Err(err) => (idx as u64 + 2, Err(err.to_string())),
        };

        match result {
            Ok(vector) => loaded.solutions.push(vector),
            Err(reason) => {
                (logger)(&format!("line {line} is skipped: {reason}"));
                loaded.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    if loaded.solutions.is_empty() {
        (logger)("WARNING: no solutions could be loaded");
    } else {
        (logger)(&format!("loaded {} solutions, skipped {} rows", loaded.solutions.len(), loaded.skipped.len()));
    }

    Ok(loaded)
}

fn check_headers(headers: &StringRecord) -> GenericResult<()> {
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| format!("'{column}'"))
        .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("required columns not found in header: {}", missing.join(", ")).into())
    }
}

fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<ObjectiveVector, String> {
    record.deserialize::<CsvSolution>(Some(headers)).map_err(|err| err.to_string())?.to_vector()
}

fn parse_value(value: &str, column: &str) -> Result<Float, String> {
    let parsed = value
        .trim()
        .replace(',', ".")
        .parse::<Float>()
        .map_err(|err| format!("cannot parse '{value}' in column '{column}': {err}"))?;

    if parsed.is_finite() { Ok(parsed) } else { Err(format!("non finite value '{value}' in column '{column}'")) }
}
