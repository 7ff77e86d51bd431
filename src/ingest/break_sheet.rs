//! Break-sheet CSV ingestion.
//!
//! Positional parse of the manually maintained break sheet. The sheet has no
//! usable header: the first two physical rows are metadata and are always
//! discarded, and data columns are addressed by position (worker name in
//! column 0, duration text in column 1, remarks in column 3, time-range text
//! in column 5). Rows are often ragged, so short records are tolerated.

use crate::error::{AuditError, AuditResult};
use crate::models::BreakSheetEntry;

use super::time_text::{parse_duration_text, parse_time_range};

const SOURCE: &str = "break sheet";

/// Number of leading metadata rows discarded before data starts.
const METADATA_ROWS: usize = 2;

const NAME_COL: usize = 0;
const DURATION_COL: usize = 1;
const REMARKS_COL: usize = 3;
const TIME_RANGE_COL: usize = 5;

/// Parses break-sheet CSV text into typed entries, in row order.
///
/// A row is skipped (not an error) when the worker-name column is blank.
/// Duration, remarks presence, and time range are parsed independently;
/// each may be absent without skipping the row. No deduplication is
/// performed.
///
/// # Errors
///
/// Returns [`AuditError::SourceFormat`] when the CSV itself cannot be read.
///
/// # Example
///
/// ```
/// use break_audit::ingest::parse_break_sheet;
///
/// let csv = "\
/// Break Sheet,,,,,
/// Driver,Break,,Remarks,,Time
/// \"Acosta, Geovanny\",15 minutes,,,,12:45pm - 1:13pm (28m)
/// ";
/// let entries = parse_break_sheet(csv).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].declared_minutes, Some(15));
/// ```
pub fn parse_break_sheet(csv_text: &str) -> AuditResult<Vec<BreakSheetEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut entries = Vec::new();

    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AuditError::SourceFormat {
            source: SOURCE.into(),
            message: e.to_string(),
        })?;

        if row_index < METADATA_ROWS {
            continue;
        }

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let worker_name = field(NAME_COL);
        if worker_name.is_empty() {
            continue;
        }

        entries.push(BreakSheetEntry {
            worker_name: worker_name.to_string(),
            declared_minutes: parse_duration_text(field(DURATION_COL)),
            time_range: parse_time_range(field(TIME_RANGE_COL)),
            has_remarks: !field(REMARKS_COL).is_empty(),
        });
    }

    Ok(entries)
}
