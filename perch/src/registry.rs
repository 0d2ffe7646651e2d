//! The seat registry: a fixed-size ordered collection of seats.
//!
//! A [`SeatRegistry`] is created once per application run and mutated in
//! place; it is the whole of the booking state. Position `i` always holds
//! seat number `i + 1`, and the length never changes after construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::seat::{Occupant, Seat, SeatNumber, SeatStatus};

#[cfg(test)]
mod proptests;

/// One row of the seat chart, as rendered to an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRecord {
    /// The seat number.
    pub number: SeatNumber,
    /// The occupancy status.
    pub status: SeatStatus,
}

impl SeatRecord {
    /// Returns the status text for this row: `available`, or
    /// `"{id} - {name}"` when booked.
    #[must_use]
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Returns `true` if the seat is free.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

impl fmt::Display for SeatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.number, self.status)
    }
}

/// The fixed collection of all seats for one exam session.
///
/// # Examples
///
/// ```
/// use perch::{Occupant, SeatRegistry};
///
/// let mut registry = SeatRegistry::new(25).unwrap();
/// assert_eq!(registry.capacity(), 25);
///
/// let alice = Occupant::new("S001", "Alice").unwrap();
/// registry.book_seat(1, alice).unwrap();
///
/// let records = registry.list_seats();
/// assert_eq!(records[0].status_text(), "S001 - Alice");
/// assert_eq!(records[1].status_text(), "available");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRegistry {
    seats: Vec<Seat>,
}

impl SeatRegistry {
    /// The seat count used when none is configured.
    pub const DEFAULT_CAPACITY: u32 = 25;

    /// Creates a registry with `capacity` free seats numbered `1..=capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::SeatRegistry;
    ///
    /// let registry = SeatRegistry::new(10).unwrap();
    /// assert_eq!(registry.capacity(), 10);
    ///
    /// assert!(SeatRegistry::new(0).is_err());
    /// ```
    pub fn new(capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity {
                value: capacity,
                reason: "a seat chart needs at least one seat".into(),
            });
        }

        let seats = (0..capacity as usize)
            .map(|index| Seat::new(SeatNumber::from_index(index)))
            .collect();

        Ok(Self { seats })
    }

    /// Creates a registry with [`SeatRegistry::DEFAULT_CAPACITY`] seats.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self {
            seats: (0..Self::DEFAULT_CAPACITY as usize)
                .map(|index| Seat::new(SeatNumber::from_index(index)))
                .collect(),
        }
    }

    /// Returns the number of seats in the registry.
    ///
    /// The capacity is fixed at construction and never changes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn capacity(&self) -> u32 {
        self.seats.len() as u32
    }

    /// Returns the number of booked seats.
    #[must_use]
    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_booked()).count()
    }

    /// Returns the number of free seats.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.seats.len() - self.booked_count()
    }

    /// Looks up the seat with the given number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatOutOfRange`] if `number` is outside
    /// `1..=capacity`.
    pub fn seat(&self, number: u32) -> Result<&Seat> {
        let number = self.checked_number(number)?;
        Ok(&self.seats[number.index()])
    }

    fn seat_mut(&mut self, number: u32) -> Result<&mut Seat> {
        let number = self.checked_number(number)?;
        Ok(&mut self.seats[number.index()])
    }

    fn checked_number(&self, number: u32) -> Result<SeatNumber> {
        if number < SeatNumber::MIN || number > self.capacity() {
            return Err(Error::SeatOutOfRange {
                seat: number,
                capacity: self.capacity(),
            });
        }
        // The bound check above makes the conversion infallible.
        SeatNumber::try_from(number).map_err(Error::from)
    }

    /// Produces the chart rows for every seat, in seat-number order.
    ///
    /// Always succeeds and is never empty.
    #[must_use]
    pub fn list_seats(&self) -> Vec<SeatRecord> {
        self.seats
            .iter()
            .map(|seat| SeatRecord {
                number: seat.number(),
                status: seat.status(),
            })
            .collect()
    }

    /// Books the addressed seat for the given occupant.
    ///
    /// The first booking wins; a booked seat is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatOutOfRange`] if `number` is outside
    /// `1..=capacity`, or [`Error::SeatAlreadyBooked`] if the seat is
    /// occupied. Either way nothing is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::{Occupant, SeatRegistry};
    ///
    /// let mut registry = SeatRegistry::new(25).unwrap();
    /// let alice = Occupant::new("S001", "Alice").unwrap();
    /// let bob = Occupant::new("S002", "Bob").unwrap();
    ///
    /// assert!(registry.book_seat(1, alice).is_ok());
    /// assert!(registry.book_seat(1, bob).is_err());
    /// assert!(registry.seat(1).unwrap().is_booked());
    /// ```
    pub fn book_seat(&mut self, number: u32, occupant: Occupant) -> Result<()> {
        let seat = self.seat_mut(number)?;
        seat.book(occupant)?;
        log::debug!("seat {number} booked");
        Ok(())
    }

    /// Cancels the booking on the addressed seat, returning the cleared
    /// occupant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatOutOfRange`] if `number` is outside
    /// `1..=capacity`, or [`Error::SeatNotBooked`] if the seat is free.
    /// Either way nothing is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::{Occupant, SeatRegistry};
    ///
    /// let mut registry = SeatRegistry::new(25).unwrap();
    /// let alice = Occupant::new("S001", "Alice").unwrap();
    /// registry.book_seat(3, alice).unwrap();
    ///
    /// let released = registry.cancel_seat(3).unwrap();
    /// assert_eq!(released.student_id(), "S001");
    /// assert!(registry.cancel_seat(3).is_err());
    /// ```
    pub fn cancel_seat(&mut self, number: u32) -> Result<Occupant> {
        let seat = self.seat_mut(number)?;
        let occupant = seat.cancel()?;
        log::debug!("seat {number} released");
        Ok(occupant)
    }
}

impl Default for SeatRegistry {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
