//! Timecard CSV ingestion.
//!
//! Header-based parse of the time-and-attendance export. The six logical
//! columns are resolved from header text case-insensitively; exact header
//! wording is a parsing detail, not a contract. Individual rows missing
//! required fields are skipped silently; only a malformed file or an
//! unresolvable column is fatal.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AuditError, AuditResult};
use crate::models::TimecardEntry;

use super::time_text::parse_clock_time;

const SOURCE: &str = "timecard";

/// Accepted pay-date cell formats, tried in order.
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Header aliases per logical column, compared on trimmed lowercase text.
const NAME_ALIASES: [&str; 3] = ["payroll name", "employee name", "name"];
const ID_ALIASES: [&str; 4] = ["file number", "employee number", "employee id", "file #"];
const DATE_ALIASES: [&str; 3] = ["pay date", "work date", "date"];
const TIME_IN_ALIASES: [&str; 3] = ["time in", "clock in", "in punch"];
const TIME_OUT_ALIASES: [&str; 3] = ["time out", "clock out", "out punch"];
const HOURS_ALIASES: [&str; 2] = ["hours", "total hours"];

/// Parses timecard CSV text into typed entries, in row order.
///
/// A row is skipped (not an error) when the name, employee id, or date cell
/// is blank or the date is unparseable, or when both punch cells are blank.
/// The hours cell defaults to zero when non-numeric. No deduplication is
/// performed; grouping happens downstream.
///
/// # Errors
///
/// Returns [`AuditError::SourceFormat`] when the CSV itself cannot be read,
/// and [`AuditError::MissingColumn`] when a logical column cannot be
/// resolved from the header row.
///
/// # Example
///
/// ```
/// use break_audit::ingest::parse_timecard;
///
/// let csv = "\
/// Payroll Name,File Number,Pay Date,Time In,Time Out,Hours
/// \"Acosta, Geovanny\",104,01/15/2026,09:00 AM,12:45 PM,3.75
/// ";
/// let entries = parse_timecard(csv).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].employee_id, "104");
/// ```
pub fn parse_timecard(csv_text: &str) -> AuditResult<Vec<TimecardEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AuditError::SourceFormat {
            source: SOURCE.into(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let resolve = |aliases: &[&str], logical: &str| -> AuditResult<usize> {
        headers
            .iter()
            .position(|h| aliases.contains(&h.as_str()))
            .ok_or_else(|| AuditError::MissingColumn {
                source: SOURCE.into(),
                column: logical.into(),
            })
    };

    let name_idx = resolve(&NAME_ALIASES, "payroll name")?;
    let id_idx = resolve(&ID_ALIASES, "file number")?;
    let date_idx = resolve(&DATE_ALIASES, "pay date")?;
    let time_in_idx = resolve(&TIME_IN_ALIASES, "time in")?;
    let time_out_idx = resolve(&TIME_OUT_ALIASES, "time out")?;
    let hours_idx = resolve(&HOURS_ALIASES, "hours")?;

    let mut entries = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| AuditError::SourceFormat {
            source: SOURCE.into(),
            message: e.to_string(),
        })?;

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let employee_name = field(name_idx);
        let employee_id = field(id_idx);
        let date_text = field(date_idx);
        if employee_name.is_empty() || employee_id.is_empty() || date_text.is_empty() {
            continue;
        }

        let Some(work_date) = parse_work_date(date_text) else {
            continue;
        };

        let time_in_text = field(time_in_idx);
        let time_out_text = field(time_out_idx);
        if time_in_text.is_empty() && time_out_text.is_empty() {
            continue;
        }

        let shift_hours = Decimal::from_str(field(hours_idx)).unwrap_or(Decimal::ZERO);

        entries.push(TimecardEntry {
            employee_name: employee_name.to_string(),
            employee_id: employee_id.to_string(),
            work_date,
            clock_in: parse_clock_time(time_in_text),
            clock_out: parse_clock_time(time_out_text),
            shift_hours,
        });
    }

    Ok(entries)
}

/// Parses a pay-date cell, trying each accepted format in order.
fn parse_work_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
