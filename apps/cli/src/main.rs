//! # billsplit Entry Point
//!
//! Parses arguments, starts logging and hands off to [`billsplit_cli::run`].
//! Any error ends the process with exit code 1.

use std::process::ExitCode;

use billsplit_cli::args::Cli;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    billsplit_cli::init_tracing(cli.verbose);

    match billsplit_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err.message);
            ExitCode::from(1)
        }
    }
}
