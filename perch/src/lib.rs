#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # perch
//!
//! A library for managing exam seat reservations.
//!
//! This library provides the seat chart for one exam session: a
//! fixed-size, in-memory collection of numbered seats that an operator
//! can list, book for a student, and release again. The whole of the
//! state lives for one application run; nothing is persisted.
//!
//! ## Core Types
//!
//! - [`Seat`], [`SeatNumber`], and [`Occupant`]: the single-seat model
//! - [`SeatRegistry`] and [`SeatRecord`]: the chart and its listing rows
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use perch::{Occupant, SeatRegistry};
//!
//! let mut registry = SeatRegistry::new(25).unwrap();
//!
//! let alice = Occupant::new("S001", "Alice").unwrap();
//! registry.book_seat(1, alice).unwrap();
//! assert_eq!(registry.list_seats()[0].status_text(), "S001 - Alice");
//!
//! registry.cancel_seat(1).unwrap();
//! assert_eq!(registry.list_seats()[0].status_text(), "available");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod seat;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use registry::{SeatRecord, SeatRegistry};
pub use seat::{Occupant, Seat, SeatNumber, SeatStatus};
