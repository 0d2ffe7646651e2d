//! Output formatting module for seat listings.
//!
//! This module provides the output formats the library itself can
//! render: a human-readable table and JSON. Delimited exports (CSV/TSV)
//! are a front-end concern.

mod formatters;

use crate::registry::SeatRecord;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for formatting seat listings into different output formats.
pub trait OutputFormatter {
    /// Format the given seat records into a string.
    ///
    /// The records are rendered in the order given, which for a registry
    /// listing is seat-number order.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., serialization).
    fn format(&self, records: &[SeatRecord]) -> Result<String>;
}

/// Available output formats for seat listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table.
    Human,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
