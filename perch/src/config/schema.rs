//! Configuration schema definitions.
//!
//! This module defines the configuration structure for perch: the seat
//! count for the session and the default output format for listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::registry::SeatRegistry;

/// Complete configuration structure.
///
/// All fields are optional; anything unset falls back to a built-in
/// default. Unknown keys in a configuration file are rejected.
///
/// # Examples
///
/// ```
/// use perch::config::Config;
///
/// let config = Config {
///     seats: Some(40),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_seats(), 40);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of seats in the chart.
    pub seats: Option<u32>,

    /// Output format for seat listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured seat count, or the default capacity.
    #[must_use]
    pub fn effective_seats(&self) -> u32 {
        self.seats.unwrap_or(SeatRegistry::DEFAULT_CAPACITY)
    }

    /// Returns the configured output format, or the default.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Overwrites this configuration with every field set in `other`.
    ///
    /// Unset fields in `other` leave the current value alone; this is
    /// how lower-precedence sources are layered under higher ones.
    pub fn merge_from(&mut self, other: &Self) {
        if other.seats.is_some() {
            self.seats = other.seats;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
    }
}

/// Output format for seat listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable).
    #[default]
    Table,
    /// JSON format.
    Json,
    /// CSV format.
    Csv,
    /// TSV format (tab-separated values).
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
