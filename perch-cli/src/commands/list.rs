//! List command implementation.
//!
//! Renders the seat chart in various formats (table, JSON, CSV, TSV).
//! Table and JSON come from the library formatters; the delimited
//! formats are produced here.

use std::io::Write;

use clap::ValueEnum;

use perch::{SeatRecord, SeatRegistry, SeatStatus};

use crate::error::CliError;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["seat", "status", "student_id", "student_name"];

/// Output format for seat listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<perch::config::OutputFormat> for OutputFormat {
    fn from(format: perch::config::OutputFormat) -> Self {
        match format {
            perch::config::OutputFormat::Table => Self::Table,
            perch::config::OutputFormat::Json => Self::Json,
            perch::config::OutputFormat::Csv => Self::Csv,
            perch::config::OutputFormat::Tsv => Self::Tsv,
        }
    }
}

/// Render the current seat chart.
pub struct ListCommand {
    format: OutputFormat,
}

impl ListCommand {
    /// Creates a list command for the given format.
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Execute the list command, writing the chart to `out`.
    pub fn execute(&self, registry: &SeatRegistry, out: &mut dyn Write) -> Result<(), CliError> {
        let records = registry.list_seats();

        match self.format {
            OutputFormat::Table => {
                let text = perch::OutputFormat::Human
                    .create_formatter()
                    .format(&records)
                    .map_err(CliError::from)?;
                writeln!(out, "{text}")?;
            }
            OutputFormat::Json => {
                let text = perch::OutputFormat::Json
                    .create_formatter()
                    .format(&records)
                    .map_err(CliError::from)?;
                writeln!(out, "{text}")?;
            }
            OutputFormat::Csv => format_as_delimited(&records, b',', out)?,
            OutputFormat::Tsv => format_as_delimited(&records, b'\t', out)?,
        }

        Ok(())
    }
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format the chart as delimited output (CSV or TSV).
fn format_as_delimited(
    records: &[SeatRecord],
    delimiter: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(&mut buffer);

        writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

        for record in records {
            let (id, name) = match &record.status {
                SeatStatus::Available => ("", ""),
                SeatStatus::Booked(occupant) => (occupant.student_id(), occupant.student_name()),
            };
            writer
                .write_record(&[
                    record.number.to_string(),
                    record.status_text(),
                    id.to_string(),
                    name.to_string(),
                ])
                .map_err(csv_error)?;
        }

        writer.flush()?;
    }

    out.write_all(&buffer)?;
    Ok(())
}
