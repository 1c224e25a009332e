#[cfg(test)]
#[path = "../../tests/unit/commands/coverage_test.rs"]
mod coverage_test;

use super::*;
use tourmo_cli::extensions::metrics::get_coverage_metrics;
use tourmo_cli::extensions::report::{write_coverage_csv, write_coverage_report};

pub fn get_coverage_app() -> Command {
    add_common_args(
        Command::new("coverage").about("Calculates binary coverage (C-metric) for every ordered pair of algorithms"),
    )
}

pub fn run_coverage(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let logger = get_logger(matches);
    let sets = get_solution_sets(matches, &logger)?;

    let rows = get_coverage_metrics(sets.as_slice(), &logger)
        .map_err(|err| format!("cannot calculate binary coverage: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    write_coverage_csv(out_writer_func(out_result), rows.as_slice())
        .map_err(|err| format!("cannot write binary coverage metrics: '{err}'"))?;

    if let Some(path) = matches.get_one::<String>(OUT_REPORT_ARG_NAME) {
        write_coverage_report(BufWriter::new(create_file(path, "out report")), rows.as_slice())
            .map_err(|err| format!("cannot write binary coverage report: '{err}'"))?;
        (logger)(&format!("binary coverage report saved to '{path}'"));
    }

    Ok(())
}
