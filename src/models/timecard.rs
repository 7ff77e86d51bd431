//! Timecard models.
//!
//! This module defines the TimecardEntry struct for punch-pair rows from the
//! time-and-attendance export, and the TimecardGap derived from consecutive
//! punch pairs.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One punch-pair row from the timecard export.
///
/// An employee may have several entries on a single date (one per punch
/// pair). At least one of `clock_in`/`clock_out` is present; ingestion skips
/// rows where both are blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardEntry {
    /// The employee's display name as written in the timecard.
    pub employee_name: String,
    /// The employee/file number identifying the employee.
    pub employee_id: String,
    /// The workday this punch pair belongs to.
    pub work_date: NaiveDate,
    /// The clock-in punch, if present.
    pub clock_in: Option<NaiveTime>,
    /// The clock-out punch, if present.
    pub clock_out: Option<NaiveTime>,
    /// Hours recorded for this punch pair; zero when unparseable.
    pub shift_hours: Decimal,
}

/// An interval between one clock-out and the next clock-in for the same
/// employee, interpreted as a candidate unlogged break.
///
/// Only produced when the interval strictly exceeds the gap floor.
/// Recomputed each run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardGap {
    /// The employee/file number the gap belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// When the gap starts (the earlier pair's clock-out).
    pub gap_start: NaiveTime,
    /// When the gap ends (the later pair's clock-in).
    pub gap_end: NaiveTime,
    /// The length of the gap in whole minutes.
    pub gap_minutes: i64,
}
