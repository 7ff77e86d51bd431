//! Reconciliation driver.
//!
//! Ties the pipeline together: detect timecard gaps for the target date,
//! fuzzy-match each employee against the break sheet, classify the pair,
//! and roll the rows up into a [`DiscrepancyReport`].

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::matching::match_one;
use crate::models::{
    BreakSheetEntry, DiscrepancyReport, EmployeeComparisonResult, TimecardEntry, TimecardGap,
};
use crate::options::ReconcileOptions;
use crate::recon::classify::classify;
use crate::recon::gap_detection::detect_gaps;
use crate::recon::summary::summarize;

/// Runs a full reconciliation of timecard entries against break-sheet
/// entries for a single date.
///
/// The timecard side drives the report: every employee with at least one
/// timecard row on `target_date` produces exactly one result row.
/// Break-sheet workers with no timecard counterpart do not appear.
///
/// When an employee has more than one qualifying gap, the earliest one is
/// reconciled and the rest are ignored.
pub fn reconcile(
    timecard_entries: &[TimecardEntry],
    break_entries: &[BreakSheetEntry],
    target_date: NaiveDate,
    options: &ReconcileOptions,
) -> DiscrepancyReport {
    let gaps = detect_gaps(timecard_entries, target_date, options.gap_floor_minutes);

    // First qualifying gap per employee; detect_gaps emits them in
    // chronological order within each employee.
    let mut gap_by_employee: HashMap<&str, &TimecardGap> = HashMap::new();
    for gap in &gaps {
        gap_by_employee.entry(gap.employee_id.as_str()).or_insert(gap);
    }

    // Group timecard rows by employee id, keeping the first-listed name and
    // summing shift hours across the day's rows.
    let mut employees: BTreeMap<&str, (&str, Decimal)> = BTreeMap::new();
    for entry in timecard_entries {
        if entry.work_date != target_date {
            continue;
        }
        employees
            .entry(entry.employee_id.as_str())
            .and_modify(|(_, hours)| *hours += entry.shift_hours)
            .or_insert((entry.employee_name.as_str(), entry.shift_hours));
    }

    let pool: Vec<&str> = break_entries
        .iter()
        .map(|e| e.worker_name.as_str())
        .collect();

    let mut results = Vec::with_capacity(employees.len());
    for (employee_id, (employee_name, total_shift_hours)) in employees {
        let name_match = match_one(employee_name, &pool, options.match_threshold);
        let break_entry = name_match.matched.as_deref().and_then(|matched| {
            break_entries.iter().find(|e| e.worker_name == matched)
        });

        let gap = gap_by_employee.get(employee_id).copied();
        let classification = classify(gap, break_entry, options.tolerance_minutes);

        results.push(EmployeeComparisonResult {
            employee_name: employee_name.to_string(),
            employee_id: employee_id.to_string(),
            matched_break_sheet_name: name_match.matched.clone(),
            match_score: name_match.score,
            gap: gap.cloned(),
            total_shift_hours,
            break_minutes: break_entry.and_then(|e| e.logged_minutes()),
            break_time_range: break_entry.and_then(|e| e.time_range.clone()),
            status: classification.status,
            discrepancy_minutes: classification.discrepancy_minutes,
            message: classification.message,
        });
    }

    let summary = summarize(&results);

    DiscrepancyReport {
        report_id: Uuid::new_v4(),
        target_date,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        summary,
        results,
    }
}
