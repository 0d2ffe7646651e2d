//! Output formatter implementations.

use crate::registry::SeatRecord;
use crate::seat::SeatStatus;
use crate::{Error, Result};

use super::OutputFormatter;

/// Column headers for tabular output.
const COLUMN_HEADERS: [&str; 2] = ["seat", "status"];

/// Formatter for human-readable table output.
///
/// Renders an uppercase, tab-separated header followed by one row per
/// seat:
///
/// ```text
/// SEAT    STATUS
/// 1       S001 - Alice
/// 2       available
/// ```
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, records: &[SeatRecord]) -> Result<String> {
        let mut lines = Vec::with_capacity(records.len() + 1);

        let header = COLUMN_HEADERS
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join("\t");
        lines.push(header);

        for record in records {
            lines.push(format!("{}\t{}", record.number, record.status));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
///
/// Every row carries the seat number and status text; booked rows
/// additionally carry the occupant's fields, free rows carry null.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, records: &[SeatRecord]) -> Result<String> {
        let rows: Vec<serde_json::Value> = records
            .iter()
            .map(|record| {
                let occupant = match &record.status {
                    SeatStatus::Available => None,
                    SeatStatus::Booked(occupant) => Some(occupant),
                };
                serde_json::json!({
                    "seat": record.number.value(),
                    "status": record.status_text(),
                    "student_id": occupant.map(|o| o.student_id()),
                    "student_name": occupant.map(|o| o.student_name()),
                })
            })
            .collect();

        serde_json::to_string_pretty(&rows).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
