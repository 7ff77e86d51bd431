//! Report summary aggregation.
//!
//! Tallies classified results into per-status counts. The five buckets
//! partition the result rows: a `match` with a gap is a reconciled break,
//! a `match` without one means no break was required that day.

use crate::models::{DiffStatus, EmployeeComparisonResult, ReportSummary};

/// Tallies per-status counts across all results.
///
/// The buckets always sum to `total_employees`, which equals the number of
/// result rows.
pub fn summarize(results: &[EmployeeComparisonResult]) -> ReportSummary {
    let mut summary = ReportSummary {
        total_employees: results.len(),
        matches: 0,
        mismatches: 0,
        missing_break_log: 0,
        missing_gap: 0,
        no_break_required: 0,
    };

    for result in results {
        match result.status {
            DiffStatus::Match if result.gap.is_some() => summary.matches += 1,
            DiffStatus::Match => summary.no_break_required += 1,
            DiffStatus::Mismatch => summary.mismatches += 1,
            DiffStatus::Deletion => summary.missing_break_log += 1,
            DiffStatus::Warning => summary.missing_gap += 1,
            // Never produced by the reconciliation driver; break-sheet-only
            // workers emit no result row at all.
            DiffStatus::Addition => {}
        }
    }

    summary
}
