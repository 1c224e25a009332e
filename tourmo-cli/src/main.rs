//! A command line interface to calculate quality indicators of itinerary optimization results.

mod commands;

mod cli {
    use super::commands::coverage::{get_coverage_app, run_coverage};
    use super::commands::create_write_buffer;
    use super::commands::hypervolume::{get_hypervolume_app, run_hypervolume};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Itinerary Quality Indicators")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to calculate quality indicators of multi-objective itinerary optimizers")
            .subcommand(get_coverage_app())
            .subcommand(get_hypervolume_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("coverage", coverage_matches)) => run_coverage(coverage_matches, create_write_buffer),
            Some(("hypervolume", hypervolume_matches)) => run_hypervolume(hypervolume_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();
    cli::run_subcommand(matches)
}
