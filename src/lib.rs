//! Break Reconciliation Engine for time-and-attendance audits
//!
//! This crate reconciles a time-and-attendance export ("timecard") against a
//! manually maintained break sheet for a single workday: it detects clock
//! gaps per employee, fuzzy-matches employee names across the two sources,
//! compares each gap against the logged break under a minute tolerance, and
//! classifies the outcome into a discrepancy report.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod ingest;
pub mod matching;
pub mod models;
pub mod options;
pub mod recon;
