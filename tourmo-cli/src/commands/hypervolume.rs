#[cfg(test)]
#[path = "../../tests/unit/commands/hypervolume_test.rs"]
mod hypervolume_test;

use super::*;
use tourmo_cli::extensions::metrics::get_hypervolume_metrics;
use tourmo_cli::extensions::report::{export_hypervolume_inputs, write_hypervolume_csv, write_hypervolume_report};

pub const CONFIG_ARG_NAME: &str = "config";
pub const EXPORT_INPUTS_ARG_NAME: &str = "export-inputs";

pub fn get_hypervolume_app() -> Command {
    add_common_args(
        Command::new("hypervolume")
            .about("Calculates raw and normalized hypervolume (HSO) of every algorithm")
            .arg(
                Arg::new(CONFIG_ARG_NAME)
                    .help("Specifies path to json file with theoretical bounds of objectives")
                    .short('c')
                    .long(CONFIG_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(EXPORT_INPUTS_ARG_NAME)
                    .help("Specifies directory to export objective vectors used for hypervolume calculation")
                    .short('e')
                    .long(EXPORT_INPUTS_ARG_NAME)
                    .required(false),
            ),
    )
}

pub fn run_hypervolume(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let logger = get_logger(matches);
    let bounds = get_bounds(matches, CONFIG_ARG_NAME)?;
    let sets = get_solution_sets(matches, &logger)?;

    let metrics = get_hypervolume_metrics(sets.as_slice(), bounds, logger.clone())
        .map_err(|err| format!("cannot calculate hypervolume: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    write_hypervolume_csv(out_writer_func(out_result), metrics.rows.as_slice())
        .map_err(|err| format!("cannot write hypervolume metrics: '{err}'"))?;

    if let Some(path) = matches.get_one::<String>(OUT_REPORT_ARG_NAME) {
        write_hypervolume_report(BufWriter::new(create_file(path, "out report")), &metrics)
            .map_err(|err| format!("cannot write hypervolume report: '{err}'"))?;
        (logger)(&format!("hypervolume report saved to '{path}'"));
    }

    if let Some(dir) = matches.get_one::<String>(EXPORT_INPUTS_ARG_NAME) {
        let paths = export_hypervolume_inputs(Path::new(dir), sets.as_slice())
            .map_err(|err| format!("cannot export hypervolume inputs: '{err}'"))?;
        paths.iter().for_each(|path| (logger)(&format!("hypervolume input saved to '{}'", path.display())));
    }

    Ok(())
}
