//! The interactive booking session.
//!
//! A session owns the seat registry for one application run and drives
//! it from a line-based command stream: stdin for interactive use, or a
//! script file. The prompt and all feedback about failures go to
//! stderr, so stdout carries nothing but seat listings and success
//! messages.

use std::io::{BufRead, Write};

use perch::{LogLevel, Logger, SeatRegistry};

use crate::commands::{ListCommand, OutputFormat, SessionCommand};
use crate::error::CliError;

const PROMPT: &str = "perch> ";

const HELP_TEXT: &str = "\
Commands:
  list                                    show the seat chart
  book <seat> <student-id> <name...>      book a seat for a student
  cancel <seat>                           release a booked seat
  help                                    show this summary
  quit                                    end the session";

/// Options controlling session behavior.
pub struct SessionOptions {
    /// Output format for seat listings.
    pub format: OutputFormat,
    /// Whether to show the banner and prompt (interactive mode).
    pub prompt: bool,
}

/// One booking session over a seat registry.
pub struct Session {
    registry: SeatRegistry,
    options: SessionOptions,
}

impl Session {
    /// Creates a session over the given registry.
    pub const fn new(registry: SeatRegistry, options: SessionOptions) -> Self {
        Self { registry, options }
    }

    /// Returns the registry, for inspection after a scripted run.
    #[cfg(test)]
    pub fn registry(&self) -> &SeatRegistry {
        &self.registry
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// Command failures are reported on stderr and the session
    /// continues; only I/O failures on the streams end the run early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        logger: &Logger,
    ) -> Result<(), CliError> {
        if self.options.prompt && logger.level() > LogLevel::Quiet {
            eprintln!(
                "perch: exam seat booking, {} seats. Type 'help' for commands.",
                self.registry.capacity()
            );
        }
        logger.debug(&format!(
            "session started with {} seats",
            self.registry.capacity()
        ));

        let mut lines = input.lines();
        loop {
            if self.options.prompt {
                eprint!("{PROMPT}");
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match SessionCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(SessionCommand::Help)) => writeln!(output, "{HELP_TEXT}")?,
                Ok(Some(SessionCommand::List)) => {
                    ListCommand::new(self.options.format).execute(&self.registry, &mut output)?;
                }
                Ok(Some(SessionCommand::Book(command))) => {
                    match command.execute(&mut self.registry) {
                        Ok(message) => writeln!(output, "{message}")?,
                        Err(e) => eprintln!("error: {e}"),
                    }
                }
                Ok(Some(SessionCommand::Cancel(command))) => {
                    match command.execute(&mut self.registry) {
                        Ok(message) => writeln!(output, "{message}")?,
                        Err(e) => eprintln!("error: {e}"),
                    }
                }
                Err(e) => eprintln!("error: {e}"),
            }
        }

        logger.debug(&format!(
            "session ended, {} of {} seats booked",
            self.registry.booked_count(),
            self.registry.capacity()
        ));
        Ok(())
    }
}
