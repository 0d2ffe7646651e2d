//! CLI structure and flag definitions.
//!
//! This module defines the command-line surface using clap's derive
//! macros. The binary runs a single interactive (or scripted) session,
//! so everything is a flag; the commands themselves are typed into the
//! session.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::OutputFormat;

/// Interactive console for managing exam seat reservations.
#[derive(Parser)]
#[command(name = "perch")]
#[command(version, about = "Manage exam seat reservations", long_about = None)]
pub struct Cli {
    /// Number of seats in the chart
    #[arg(long, value_name = "COUNT", env = "PERCH_SEATS")]
    pub seats: Option<u32>,

    /// Load configuration from a specific file
    #[arg(long, value_name = "PATH", env = "PERCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for seat listings
    #[arg(
        long,
        value_enum,
        value_name = "FORMAT",
        env = "PERCH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: Option<OutputFormat>,

    /// Run commands from a file instead of an interactive session
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}
