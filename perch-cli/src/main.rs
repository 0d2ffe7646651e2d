//! Main entry point for the perch CLI.
//!
//! This is the console front end for the perch seat reservation system.
//! It builds one seat registry for the run and drives it from an
//! interactive session (or a `--script` file) with the commands:
//! - `list`: show the seat chart
//! - `book`: book a seat for a student
//! - `cancel`: release a booked seat

mod cli;
mod commands;
mod error;
mod session;
mod utils;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;

use cli::Cli;
use error::CliError;
use perch::{ConfigBuilder, Logger, SeatRegistry};
use session::{Session, SessionOptions};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = perch::init_logger(cli.verbose, cli.quiet);

    // Run the session and set the exit code
    match run(cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, logger: &Logger) -> Result<(), CliError> {
    // Resolve configuration: defaults < files < environment < flags
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_path(path);
    }
    let config = builder.build()?;

    let seats = cli.seats.unwrap_or_else(|| config.effective_seats());
    let registry = SeatRegistry::new(seats)?;

    let format = cli
        .format
        .unwrap_or_else(|| config.effective_output_format().into());

    let options = SessionOptions {
        format,
        prompt: cli.script.is_none(),
    };
    let mut session = Session::new(registry, options);

    match &cli.script {
        Some(path) => {
            let file = File::open(path)?;
            session.run(BufReader::new(file), io::stdout().lock(), logger)
        }
        None => session.run(io::stdin().lock(), io::stdout().lock(), logger),
    }
}
