use crate::extensions::map_csv_error;
use serde::Serialize;
use std::io::Write;
use tourmo_core::prelude::*;

#[derive(Serialize)]
struct CsvSolution {
    #[serde(rename = "Cost")]
    cost: Float,
    #[serde(rename = "Time")]
    time: Float,
    #[serde(rename = "-Attractions")]
    attractions: Float,
    #[serde(rename = "-Neighborhoods")]
    neighborhoods: Float,
}

/// Writes binary coverage rows as csv.
pub fn write_coverage_csv<W: Write>(writer: W, rows: &[CoverageRow]) -> GenericResult<()> {
    write_records(writer, rows.iter())
}

/// Writes hypervolume rows as csv.
pub fn write_hypervolume_csv<W: Write>(writer: W, rows: &[HypervolumeRow]) -> GenericResult<()> {
    write_records(writer, rows.iter())
}

/// Writes objective vectors as csv, maximized objectives are kept negated.
pub fn write_solutions_csv<W: Write>(writer: W, solutions: &[ObjectiveVector]) -> GenericResult<()> {
    write_records(
        writer,
        solutions.iter().map(|solution| {
            let &[cost, time, attractions, neighborhoods] = solution.values();
            CsvSolution { cost, time, attractions, neighborhoods }
        }),
    )
}

fn write_records<W, T, I>(writer: W, records: I) -> GenericResult<()>
where
    W: Write,
    T: Serialize,
    I: Iterator<Item = T>,
{
    let mut writer = ::csv::Writer::from_writer(writer);

    for record in records {
        writer.serialize(record).map_err(map_csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
