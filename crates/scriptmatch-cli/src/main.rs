mod commands;
mod console;
mod logging;

use std::process;

use clap::Parser;
use colored::*;
use commands::Cli;
use console::ConsolePrompt;
use dotenv::dotenv;
use scriptmatch_core::{Error, MatchEngine, RunReport};
use tracing::error;

const USAGE_HINT: &str =
    "Usage: scriptmatch <SOURCES>... <DESTINATION>\n\
     Link media files and scripts in SOURCES together into DESTINATION";

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = match scriptmatch_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => exit_with_usage(&err),
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(list_max) = args.list_max {
        config.display_limit = list_max;
    }

    if args.print_config {
        println!("Configuration: {:?}", config);
        return;
    }

    let engine = MatchEngine::new(config);
    let mut prompt = ConsolePrompt;

    match engine.run(&args.sources, &args.destination, &mut prompt) {
        Ok(report) => {
            if report.aborted {
                println!("\nLeaving early.");
            }
            print_summary(&report);
        }
        Err(err) => {
            error!("Error: {}", err);
            exit_with_usage(&err);
        }
    }
}

fn print_summary(report: &RunReport) {
    println!(
        "\n{} pairs linked; {} pairs failed.\n",
        report.succeeded.len().to_string().green(),
        report.failed.len().to_string().red(),
    );
}

fn exit_with_usage(err: &Error) -> ! {
    eprintln!("\nExiting with error: {err}\n{USAGE_HINT}");
    process::exit(2);
}
