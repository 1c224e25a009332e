//! Import of optimization results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

mod csv;
pub use self::csv::*;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tourmo_core::prelude::*;

/// A suffix of result file names.
pub const RESULT_FILE_SUFFIX: &str = "resultados.csv";

/// Returns a readable algorithm name from result file name, e.g. `nsga2-resultados.csv` gives `NSGA-II`.
pub fn get_algorithm_name(path: &Path) -> String {
    let file_name = path.file_name().map(|name| name.to_string_lossy().to_lowercase()).unwrap_or_default();

    let base_name = if let Some((base_name, _)) = file_name.split_once("-resultados.csv") {
        base_name
    } else if let Some((base_name, _)) = file_name.split_once(RESULT_FILE_SUFFIX) {
        base_name.trim_end_matches('-')
    } else {
        file_name.strip_suffix(".csv").unwrap_or(file_name.as_str())
    };

    match base_name {
        "nsga2" => "NSGA-II".to_string(),
        "moead" => "MOEA/D".to_string(),
        "spea2" => "SPEA2".to_string(),
        "movns" => "MOVNS".to_string(),
        _ => to_title_case(base_name.replace('_', " ").as_str()),
    }
}

/// Finds all result files inside the directory. Returned paths are sorted and unique.
pub fn discover_result_files(dir: &Path) -> GenericResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|err| format!("cannot read results directory '{}': '{err}'", dir.display()))?;

    let mut paths = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name().is_some_and(|name| name.to_string_lossy().to_lowercase().ends_with(RESULT_FILE_SUFFIX))
        })
        .collect::<Vec<_>>();

    paths.sort();
    paths.dedup();

    Ok(paths)
}

/// Loads solution sets from result files, one set per file named after the algorithm.
pub fn load_solution_sets(paths: &[PathBuf], logger: &InfoLogger) -> GenericResult<Vec<NamedSolutionSet>> {
    paths
        .iter()
        .map(|path| {
            let name = get_algorithm_name(path);
            let file = File::open(path).map_err(|err| format!("cannot open '{}': '{err}'", path.display()))?;

            (logger)(&format!("loading solutions of {name} from '{}'", path.display()));
            let loaded = read_csv_solutions(BufReader::new(file), logger)
                .map_err(|err| format!("cannot load '{}': {err}", path.display()))?;

            Ok(NamedSolutionSet::new(name, loaded.solutions))
        })
        .collect()
}

/// Capitalizes every first letter of a word and lowercases the rest, a letter which follows
/// a non letter character starts a new word.
fn to_title_case(value: &str) -> String {
    let mut is_word_start = true;

    value
        .chars()
        .flat_map(|ch| {
            let is_alphabetic = ch.is_alphabetic();
            let converted =
                if is_word_start { ch.to_uppercase().collect::<Vec<_>>() } else { ch.to_lowercase().collect() };
            is_word_start = !is_alphabetic;

            converted
        })
        .collect()
}
