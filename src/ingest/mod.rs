//! CSV ingestion for the Break Reconciliation Engine.
//!
//! Two independent, order-preserving ingestors turn raw CSV text into the
//! typed entries of [`crate::models`]: a header-based timecard parse and a
//! positional break-sheet parse. Both fail fast only when the file itself is
//! malformed; individual rows degrade to skips or absent fields. No untyped
//! row representation escapes this module.

mod break_sheet;
mod time_text;
mod timecard;

pub use break_sheet::parse_break_sheet;
pub use time_text::{parse_clock_time, parse_duration_text, parse_time_range};
pub use timecard::parse_timecard;
