//! apidiff CLI
//!
//! Compares the values two JSON endpoints expose under a JSONPath.
//!
//! Exit codes: 0 when equivalent (or a config is valid), 1 when the sides
//! differ, 2 on any error.

use apidiff_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;
mod config;
mod report;

use commands::Outcome;

#[derive(Debug, Parser)]
#[command(name = "apidiff")]
#[command(about = "apidiff - Compare values extracted from two JSON APIs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch both endpoints and compare the selected values
    Compare(commands::compare::CompareArgs),
    /// Check a config file without making any request
    Validate(commands::validate::ValidateArgs),
}

const EXIT_MISMATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let profile = match &cli.command {
        Commands::Compare(args) if args.log_json => Profile::Production,
        Commands::Compare(args) if args.verbose => Profile::Development,
        _ => Profile::Quiet,
    };
    init(profile);

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    };

    match result {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatch) => ExitCode::from(EXIT_MISMATCH),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
