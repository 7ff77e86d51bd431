//! Break-sheet models.
//!
//! This module defines the BreakSheetEntry struct for rows on the manually
//! maintained break sheet, and the BreakTimeRange extracted from free-text
//! range cells such as "12:45pm - 1:13pm (28m)".

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A break start/end pair extracted from a free-text range cell.
///
/// Every sub-field is independently optional: a cell may carry a parseable
/// range without the `(Nm)` annotation, or the annotation with an
/// unparseable start or end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakTimeRange {
    /// The break start time, if it parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveTime>,
    /// The break end time, if it parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveTime>,
    /// The parenthesized actual duration annotation in minutes, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_minutes: Option<i64>,
}

/// One worker's row on the break sheet.
///
/// `declared_minutes` and `time_range` are independently optional; either,
/// both, or neither may be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSheetEntry {
    /// The worker's display name as written on the break sheet.
    pub worker_name: String,
    /// The declared break duration in minutes, if the duration cell parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_minutes: Option<i64>,
    /// The break time range, if the range cell held one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<BreakTimeRange>,
    /// Whether the remarks cell was non-blank.
    pub has_remarks: bool,
}

impl BreakSheetEntry {
    /// Returns the logged break duration in minutes, preferring the parsed
    /// actual-range annotation over the declared duration.
    pub fn logged_minutes(&self) -> Option<i64> {
        self.time_range
            .as_ref()
            .and_then(|r| r.actual_minutes)
            .or(self.declared_minutes)
    }
}
