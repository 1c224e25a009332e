//! Writes calculated metrics as csv tables and human readable reports.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/report/report_test.rs"]
mod report_test;

mod csv;
pub use self::csv::*;

mod text;
pub use self::text::*;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tourmo_core::prelude::*;

/// Returns file name used to export hypervolume input of the algorithm.
pub fn get_hypervolume_input_file_name(algorithm: &str) -> String {
    format!("{}_hypervolume_input.csv", algorithm.to_lowercase().replace([' ', '/'], "_"))
}

/// Exports objective vectors of every non empty solution set into the directory, one file per algorithm.
pub fn export_hypervolume_inputs(dir: &Path, sets: &[NamedSolutionSet]) -> GenericResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|err| format!("cannot create directory '{}': '{err}'", dir.display()))?;

    sets.iter()
        .filter(|set| !set.solutions.is_empty())
        .map(|set| {
            let path = dir.join(get_hypervolume_input_file_name(set.name.as_str()));
            let file = File::create(&path).map_err(|err| format!("cannot create '{}': '{err}'", path.display()))?;

            write_solutions_csv(BufWriter::new(file), set.solutions.as_slice())?;

            Ok(path)
        })
        .collect()
}
