//! Core data models for the Break Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod break_sheet;
mod report;
mod timecard;

pub use break_sheet::{BreakSheetEntry, BreakTimeRange};
pub use report::{DiffStatus, DiscrepancyReport, EmployeeComparisonResult, ReportSummary};
pub use timecard::{TimecardEntry, TimecardGap};
