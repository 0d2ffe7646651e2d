//! Error types for the perch library.
//!
//! This module provides the error hierarchy for seat registry
//! operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::seat::{Occupant, SeatNumber};

/// Result type alias for operations that may fail with a perch error.
///
/// # Examples
///
/// ```
/// use perch::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(25)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the perch library.
///
/// Every failure of a registry operation is recoverable: the registry is
/// never mutated on the error path, and the caller can simply re-prompt.
///
/// Callers that only care about the two-outcome success/failure contract
/// can collapse any of these through [`Result::is_ok`]; the variants
/// exist so that front ends can tell an addressing mistake from a state
/// conflict.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid seat number was provided.
    #[error("invalid seat number {value}: {reason}")]
    InvalidSeatNumber {
        /// The invalid seat number value.
        value: u32,
        /// The reason the value is invalid.
        reason: String,
    },

    /// A seat number outside the registry bounds was addressed.
    #[error("seat {seat} out of range 1-{capacity}")]
    SeatOutOfRange {
        /// The seat number that was addressed.
        seat: u32,
        /// The registry capacity.
        capacity: u32,
    },

    /// A booking was attempted on an occupied seat.
    #[error("seat {seat} already booked by {occupant}")]
    SeatAlreadyBooked {
        /// The seat that was already booked.
        seat: SeatNumber,
        /// The occupant holding the booking.
        occupant: Occupant,
    },

    /// A cancellation was attempted on a free seat.
    #[error("seat {seat} is not booked")]
    SeatNotBooked {
        /// The seat that was not booked.
        seat: SeatNumber,
    },

    /// A registry was constructed with an unusable capacity.
    #[error("invalid capacity {value}: {reason}")]
    InvalidCapacity {
        /// The invalid capacity value.
        value: u32,
        /// The reason the capacity is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Conversions from the module-level validation errors.

impl From<crate::seat::InvalidSeatNumberError> for Error {
    fn from(err: crate::seat::InvalidSeatNumberError) -> Self {
        Self::InvalidSeatNumber {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::seat::ValidationError> for Error {
    fn from(err: crate::seat::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::seat::SeatOccupiedError> for Error {
    fn from(err: crate::seat::SeatOccupiedError) -> Self {
        Self::SeatAlreadyBooked {
            seat: err.seat,
            occupant: err.occupant,
        }
    }
}

impl From<crate::seat::SeatVacantError> for Error {
    fn from(err: crate::seat::SeatVacantError) -> Self {
        Self::SeatNotBooked { seat: err.seat }
    }
}

impl Error {
    /// Check if the error is an out-of-range seat address.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::Error;
    ///
    /// let err = Error::SeatOutOfRange { seat: 26, capacity: 25 };
    /// assert!(err.is_out_of_range());
    /// ```
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::SeatOutOfRange { .. })
    }

    /// Check if the error is a state conflict: booking an occupied seat
    /// or cancelling a free one.
    #[must_use]
    pub fn is_state_conflict(&self) -> bool {
        matches!(
            self,
            Self::SeatAlreadyBooked { .. } | Self::SeatNotBooked { .. }
        )
    }
}
