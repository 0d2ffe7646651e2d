//! Cancel command implementation.

use perch::SeatRegistry;

use crate::error::CliError;
use crate::utils::parse_seat_number;

/// Cancel the booking on a seat.
#[derive(Debug, PartialEq, Eq)]
pub struct CancelCommand {
    /// The seat number to release.
    pub seat: u32,
}

impl CancelCommand {
    /// Parses a cancel command from session arguments.
    pub fn from_args(args: &[&str]) -> Result<Self, CliError> {
        match args {
            [seat] => Ok(Self {
                seat: parse_seat_number(seat)?,
            }),
            _ => Err(CliError::InvalidArguments("usage: cancel <seat>".into())),
        }
    }

    /// Execute the cancellation, returning the feedback line on success.
    pub fn execute(self, registry: &mut SeatRegistry) -> Result<String, perch::Error> {
        let released = registry.cancel_seat(self.seat)?;
        Ok(format!("released seat {} (was {released})", self.seat))
    }
}
