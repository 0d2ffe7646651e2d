//! Shared parsing helpers for session commands.

use crate::error::CliError;

/// Parses an operator-typed seat number token.
///
/// The session layer owns integer validation; the core registry only
/// ever sees well-typed numbers.
pub fn parse_seat_number(token: &str) -> Result<u32, CliError> {
    token.parse().map_err(|_| {
        CliError::InvalidArguments(format!("seat number must be an integer, got '{token}'"))
    })
}
