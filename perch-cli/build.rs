//! Build script for perch-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release
//! builds.
//!
//! Note: We build a minimal command structure here rather than importing
//! from the main crate, since build scripts cannot depend on the crate
//! being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying flags, update both files.
fn build_cli() -> Command {
    Command::new("perch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage exam seat reservations")
        .long_about(
            "Interactive console for viewing, booking, and releasing numbered exam seats",
        )
        .arg(
            Arg::new("seats")
                .long("seats")
                .help("Number of seats in the chart")
                .value_name("COUNT")
                .env("PERCH_SEATS"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from a specific file")
                .value_name("PATH")
                .env("PERCH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for seat listings")
                .value_name("FORMAT")
                .env("PERCH_OUTPUT_FORMAT"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .help("Run commands from a file instead of an interactive session")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate the main perch.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("perch.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
