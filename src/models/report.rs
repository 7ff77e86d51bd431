//! Report models for the Break Reconciliation Engine.
//!
//! This module contains the [`DiscrepancyReport`] root aggregate and its
//! associated structures: the per-employee comparison result, the closed
//! discrepancy-status enumeration, and the per-status summary counts.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BreakTimeRange, TimecardGap};

/// The classification of one employee's gap/break comparison.
///
/// This is the single source of truth for classification; each result row
/// carries exactly one status.
///
/// # Example
///
/// ```
/// use break_audit::models::DiffStatus;
///
/// let status = DiffStatus::Deletion;
/// assert_eq!(status.to_string(), "deletion");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    /// Gap and logged break agree within tolerance, or neither exists.
    Match,
    /// Gap and logged break disagree beyond tolerance.
    Mismatch,
    /// Reserved for break-sheet rows with no timecard counterpart. The
    /// current driver never emits it; unmatched break-sheet workers produce
    /// no result row.
    Addition,
    /// A gap was detected but no break-sheet entry matched.
    Deletion,
    /// An irregular pairing: break logged without a gap, or a gap with an
    /// unspecified logged duration.
    Warning,
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffStatus::Match => write!(f, "match"),
            DiffStatus::Mismatch => write!(f, "mismatch"),
            DiffStatus::Addition => write!(f, "addition"),
            DiffStatus::Deletion => write!(f, "deletion"),
            DiffStatus::Warning => write!(f, "warning"),
        }
    }
}

/// The reconciliation output row for one employee on the target date.
///
/// Immutable once built; one per distinct employee present in the timecard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeComparisonResult {
    /// The employee's display name from the timecard.
    pub employee_name: String,
    /// The employee/file number.
    pub employee_id: String,
    /// The break-sheet name that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_break_sheet_name: Option<String>,
    /// The best similarity score seen against the break-sheet pool (0-100).
    pub match_score: u32,
    /// The detected clock gap used for comparison, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<TimecardGap>,
    /// Total hours across all of this employee's punch pairs on the date.
    pub total_shift_hours: Decimal,
    /// The logged break duration in minutes, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_minutes: Option<i64>,
    /// The logged break time range, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_time_range: Option<BreakTimeRange>,
    /// The classification for this employee.
    pub status: DiffStatus,
    /// Signed gap-minus-logged difference in minutes, where defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrepancy_minutes: Option<i64>,
    /// Human-readable explanation of the classification.
    pub message: String,
}

/// Per-status counts across all results in a report.
///
/// The five buckets partition the results: their sum always equals
/// `total_employees`, which equals the number of result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of distinct timecard employees on the target date.
    pub total_employees: usize,
    /// Gaps that agreed with their logged break within tolerance.
    pub matches: usize,
    /// Gaps that disagreed with their logged break beyond tolerance.
    pub mismatches: usize,
    /// Gaps with no matching break-sheet entry.
    pub missing_break_log: usize,
    /// Break-sheet matches with no usable gap comparison (warnings).
    pub missing_gap: usize,
    /// Employees with neither a gap nor a matched break entry.
    pub no_break_required: usize,
}

/// The root aggregate handed to presentation and export collaborators.
///
/// Built once per comparison run; read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// The workday that was reconciled.
    pub target_date: NaiveDate,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// Per-status counts.
    pub summary: ReportSummary,
    /// One row per distinct timecard employee on the target date.
    pub results: Vec<EmployeeComparisonResult>,
}
