//! Session command parsing and implementations.
//!
//! Each command the operator can type has its own module; this module
//! owns the dispatch type that turns an input line into a command.

mod book;
mod cancel;
mod list;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use list::{ListCommand, OutputFormat};

use crate::error::CliError;

/// A parsed session command.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Render the seat chart.
    List,
    /// Book a seat for a student.
    Book(BookCommand),
    /// Cancel the booking on a seat.
    Cancel(CancelCommand),
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

impl SessionCommand {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Keywords are
    /// case-insensitive.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_lowercase().as_str() {
            "list" => {
                if !args.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "list takes no arguments".into(),
                    ));
                }
                Self::List
            }
            "book" => Self::Book(BookCommand::from_args(args)?),
            "cancel" => Self::Cancel(CancelCommand::from_args(args)?),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CliError::InvalidArguments(format!(
                    "unknown command '{other}' (try 'help')"
                )))
            }
        };

        Ok(Some(command))
    }
}
