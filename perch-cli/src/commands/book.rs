//! Book command implementation.

use perch::{Occupant, SeatRegistry};

use crate::error::CliError;
use crate::utils::parse_seat_number;

/// Book a seat for a student.
#[derive(Debug, PartialEq, Eq)]
pub struct BookCommand {
    /// The seat number to book.
    pub seat: u32,
    /// The student identifier.
    pub student_id: String,
    /// The student name (may contain spaces).
    pub student_name: String,
}

impl BookCommand {
    /// Parses a book command from session arguments.
    ///
    /// Everything after the student id is treated as the student name,
    /// so names may contain spaces.
    pub fn from_args(args: &[&str]) -> Result<Self, CliError> {
        if args.len() < 3 {
            return Err(CliError::InvalidArguments(
                "usage: book <seat> <student-id> <student-name>".into(),
            ));
        }

        Ok(Self {
            seat: parse_seat_number(args[0])?,
            student_id: args[1].to_string(),
            student_name: args[2..].join(" "),
        })
    }

    /// Execute the booking, returning the feedback line on success.
    pub fn execute(self, registry: &mut SeatRegistry) -> Result<String, perch::Error> {
        let occupant = Occupant::new(self.student_id, self.student_name)?;
        registry.book_seat(self.seat, occupant.clone())?;
        Ok(format!("booked seat {} for {occupant}", self.seat))
    }
}
