//! Reconciliation logic for the break audit engine.
//!
//! This module contains the reconciliation pipeline: timecard gap detection,
//! gap/break-entry classification against the reporting tolerance, report
//! summary aggregation, and the driver that assembles a full discrepancy
//! report for a single date.

mod classify;
mod engine;
mod gap_detection;
mod summary;

pub use classify::{Classification, classify};
pub use engine::reconcile;
pub use gap_detection::detect_gaps;
pub use summary::summarize;
