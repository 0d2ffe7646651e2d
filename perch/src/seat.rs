//! Seat and occupant types for the exam seat chart.
//!
//! This module provides the single-seat model: a validated seat number,
//! the student identity occupying a seat, and the free/booked state
//! transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A valid seat number (1-based).
///
/// Seat number 0 is invalid; seats are addressed the way they are printed
/// on the exam room chart, starting at 1.
///
/// # Examples
///
/// ```
/// use perch::SeatNumber;
///
/// // Valid seat number
/// let seat = SeatNumber::try_from(12).unwrap();
/// assert_eq!(seat.value(), 12);
///
/// // Invalid seat number (0)
/// assert!(SeatNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumber(u32);

impl SeatNumber {
    /// The minimum valid seat number.
    pub const MIN: u32 = 1;

    /// Returns the underlying seat number.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::SeatNumber;
    ///
    /// let seat = SeatNumber::try_from(7).unwrap();
    /// assert_eq!(seat.value(), 7);
    /// ```
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Builds the seat number for a 0-based chart position.
    ///
    /// Position `i` holds seat number `i + 1`.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Returns the 0-based chart position of this seat number.
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u32> for SeatNumber {
    type Error = InvalidSeatNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidSeatNumberError {
                value,
                reason: "seat numbers start at 1".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid seat numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSeatNumberError {
    /// The invalid seat number value.
    pub value: u32,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSeatNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid seat number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSeatNumberError {}

/// The student identity occupying a seat.
///
/// Both fields are required and must be non-empty after trimming
/// whitespace; the surrounding whitespace itself is dropped.
///
/// # Examples
///
/// ```
/// use perch::Occupant;
///
/// let occupant = Occupant::new("S001", "Alice").unwrap();
/// assert_eq!(occupant.student_id(), "S001");
/// assert_eq!(occupant.student_name(), "Alice");
/// assert_eq!(format!("{occupant}"), "S001 - Alice");
///
/// // Empty or whitespace-only fields are rejected
/// assert!(Occupant::new("", "Alice").is_err());
/// assert!(Occupant::new("S001", "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    student_id: String,
    student_name: String,
}

impl Occupant {
    /// Creates a new occupant.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either field is empty after
    /// trimming whitespace.
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let student_id = Self::required_field("student_id", student_id.into())?;
        let student_name = Self::required_field("student_name", student_name.into())?;

        Ok(Self {
            student_id,
            student_name,
        })
    }

    fn required_field(field: &str, value: String) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: field.into(),
                message: "must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(trimmed.to_string())
    }

    /// Returns the student identifier.
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Returns the student name.
    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.student_id, self.student_name)
    }
}

/// Error type for invalid occupant fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The occupancy state of a seat at one point in time.
///
/// The display rendering matches the seat chart: the fixed token
/// `available` for a free seat, or `"{id} - {name}"` for a booked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatStatus {
    /// The seat is free.
    Available,
    /// The seat is booked by the given occupant.
    Booked(Occupant),
}

impl SeatStatus {
    /// The status token shown for a free seat.
    pub const AVAILABLE: &'static str = "available";

    /// Returns `true` if the status is [`SeatStatus::Available`].
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str(Self::AVAILABLE),
            Self::Booked(occupant) => write!(f, "{occupant}"),
        }
    }
}

/// A single bookable seat.
///
/// A seat holds its immutable number and, when booked, the occupant
/// identity. The occupant is present exactly when the seat is booked;
/// `book` and `cancel` set and clear both together.
///
/// # Examples
///
/// ```
/// use perch::{Occupant, Seat, SeatNumber};
///
/// let number = SeatNumber::try_from(1).unwrap();
/// let mut seat = Seat::new(number);
/// assert!(!seat.is_booked());
///
/// let alice = Occupant::new("S001", "Alice").unwrap();
/// seat.book(alice).unwrap();
/// assert!(seat.is_booked());
/// assert_eq!(seat.status().to_string(), "S001 - Alice");
///
/// let released = seat.cancel().unwrap();
/// assert_eq!(released.student_id(), "S001");
/// assert_eq!(seat.status().to_string(), "available");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    number: SeatNumber,
    occupant: Option<Occupant>,
}

impl Seat {
    /// Creates a new free seat with the given number.
    #[must_use]
    pub const fn new(number: SeatNumber) -> Self {
        Self {
            number,
            occupant: None,
        }
    }

    /// Returns the seat number.
    #[must_use]
    pub const fn number(&self) -> SeatNumber {
        self.number
    }

    /// Returns `true` if the seat is booked.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.occupant.is_some()
    }

    /// Returns the current occupant, if the seat is booked.
    #[must_use]
    pub fn occupant(&self) -> Option<&Occupant> {
        self.occupant.as_ref()
    }

    /// Returns the occupancy status of the seat.
    #[must_use]
    pub fn status(&self) -> SeatStatus {
        match &self.occupant {
            None => SeatStatus::Available,
            Some(occupant) => SeatStatus::Booked(occupant.clone()),
        }
    }

    /// Books the seat for the given occupant.
    ///
    /// The first booking wins: a booked seat is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns a [`SeatOccupiedError`] carrying the current occupant if
    /// the seat is already booked. The seat is left unchanged.
    pub fn book(&mut self, occupant: Occupant) -> Result<(), SeatOccupiedError> {
        match &self.occupant {
            Some(current) => Err(SeatOccupiedError {
                seat: self.number,
                occupant: current.clone(),
            }),
            None => {
                self.occupant = Some(occupant);
                Ok(())
            }
        }
    }

    /// Cancels the booking, returning the seat to free.
    ///
    /// # Errors
    ///
    /// Returns a [`SeatVacantError`] if the seat is not booked. The seat
    /// is left unchanged.
    pub fn cancel(&mut self) -> Result<Occupant, SeatVacantError> {
        self.occupant
            .take()
            .ok_or(SeatVacantError { seat: self.number })
    }
}

/// Error type for booking an already-booked seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatOccupiedError {
    /// The seat that was already booked.
    pub seat: SeatNumber,
    /// The occupant holding the booking.
    pub occupant: Occupant,
}

impl fmt::Display for SeatOccupiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {} already booked by {}", self.seat, self.occupant)
    }
}

impl std::error::Error for SeatOccupiedError {}

/// Error type for cancelling a seat that is not booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatVacantError {
    /// The seat that was not booked.
    pub seat: SeatNumber,
}

impl fmt::Display for SeatVacantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {} is not booked", self.seat)
    }
}

impl std::error::Error for SeatVacantError {}
