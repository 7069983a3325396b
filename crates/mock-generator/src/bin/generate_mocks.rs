//! `generate-mocks` binary.
//!
//! Parses arguments and hands the process streams to
//! `mock_generator::cli::run`, keeping the command testable without spawning
//! a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use mock_generator::cli::{Cli, init_logging, run};

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(print_err) = err.print() {
                drop(print_err);
            }
            return code;
        }
    };

    match run(&cli, io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "[ERROR] {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
