use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod coverage;
pub mod hypervolume;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::process;
use tourmo_cli::extensions::import::{discover_result_files, load_solution_sets};
use tourmo_core::models::read_bounds_config;
use tourmo_core::prelude::*;
use tourmo_core::utils::{create_silent_logger, create_stdout_logger};

pub const INPUT_ARG_NAME: &str = "input-files";
pub const RESULTS_DIR_ARG_NAME: &str = "results-dir";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const OUT_REPORT_ARG_NAME: &str = "out-report";
pub const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

/// Adds arguments shared by all indicator commands.
fn add_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets result files of algorithms to compare")
                .short('i')
                .long(INPUT_ARG_NAME)
                .num_args(1..)
                .conflicts_with(RESULTS_DIR_ARG_NAME)
                .required_unless_present(RESULTS_DIR_ARG_NAME),
        )
        .arg(
            Arg::new(RESULTS_DIR_ARG_NAME)
                .help("Sets directory to search for result files ending with 'resultados.csv'")
                .short('d')
                .long(RESULTS_DIR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for metrics output in csv format")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_REPORT_ARG_NAME)
                .help("Specifies path to the file for human readable report")
                .short('r')
                .long(OUT_REPORT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether calculation details should be logged to stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

fn get_logger(matches: &ArgMatches) -> InfoLogger {
    if matches.get_flag(LOG_ARG_NAME) { create_stdout_logger() } else { create_silent_logger() }
}

fn get_input_paths(matches: &ArgMatches) -> Result<Vec<PathBuf>, String> {
    let input_files =
        matches.get_many::<String>(INPUT_ARG_NAME).map(|paths| paths.map(PathBuf::from).collect::<Vec<_>>());
    let results_dir = matches.get_one::<String>(RESULTS_DIR_ARG_NAME);

    match (input_files, results_dir) {
        (Some(input_files), _) => Ok(input_files),
        (None, Some(results_dir)) => discover_result_files(Path::new(results_dir))
            .map_err(|err| format!("cannot find result files: '{err}'"))
            .and_then(|paths| {
                if paths.is_empty() {
                    Err(format!("no result files found in '{results_dir}'"))
                } else {
                    Ok(paths)
                }
            }),
        (None, None) => Err(format!("either '--{INPUT_ARG_NAME}' or '--{RESULTS_DIR_ARG_NAME}' should be specified")),
    }
}

fn get_solution_sets(matches: &ArgMatches, logger: &InfoLogger) -> Result<Vec<NamedSolutionSet>, String> {
    let paths = get_input_paths(matches)?;

    load_solution_sets(paths.as_slice(), logger).map_err(|err| format!("cannot load solutions: '{err}'"))
}

fn get_bounds(matches: &ArgMatches, config_arg_name: &str) -> Result<ObjectiveBounds, String> {
    matches
        .get_one::<String>(config_arg_name)
        .map(|path| {
            read_bounds_config(BufReader::new(open_file(path, "config")))
                .map_err(|err| format!("cannot read config: '{err}'"))
        })
        .unwrap_or_else(|| Ok(ObjectiveBounds::default()))
}
