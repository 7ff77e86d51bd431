//! Reconciliation parameters and their defaults.
//!
//! Every threshold in the engine is an explicit parameter carried in
//! [`ReconcileOptions`] rather than a module-level constant, so callers and
//! tests can vary them per run without process-wide side effects.

use serde::{Deserialize, Serialize};

/// Default minimum similarity score (0-100) for a name match to count.
pub const DEFAULT_MATCH_THRESHOLD: u32 = 80;

/// Default gap floor in minutes. Clock gaps at or below this length are not
/// candidate breaks; they are punch-rounding artifacts.
pub const DEFAULT_GAP_FLOOR_MINUTES: i64 = 10;

/// Default tolerance in minutes between a detected gap and its logged break
/// for the pair to still classify as a match.
pub const DEFAULT_TOLERANCE_MINUTES: i64 = 5;

/// Parameters for a single reconciliation run.
///
/// # Example
///
/// ```
/// use break_audit::options::ReconcileOptions;
///
/// let options = ReconcileOptions::default();
/// assert_eq!(options.match_threshold, 80);
/// assert_eq!(options.gap_floor_minutes, 10);
/// assert_eq!(options.tolerance_minutes, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Minimum similarity score (0-100) for a break-sheet name to match.
    pub match_threshold: u32,
    /// Minimum clock-gap length in minutes to qualify as a candidate break.
    pub gap_floor_minutes: i64,
    /// Maximum allowed difference in minutes between gap and logged break.
    pub tolerance_minutes: i64,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            gap_floor_minutes: DEFAULT_GAP_FLOOR_MINUTES,
            tolerance_minutes: DEFAULT_TOLERANCE_MINUTES,
        }
    }
}
