//! Request types for the break audit API.
//!
//! This module defines the JSON request structure for the `/reconcile` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::options::ReconcileOptions;

/// Request body for the `/reconcile` endpoint.
///
/// Carries both source documents as raw CSV text plus the date to audit.
/// Threshold overrides are optional; omitted fields fall back to the
/// server's configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// Raw CSV export of the timecard system.
    pub timecard_csv: String,
    /// Raw CSV export of the handwritten break sheet.
    pub break_sheet_csv: String,
    /// The work date to reconcile.
    pub target_date: NaiveDate,
    /// Optional override for reporting tolerance in minutes.
    #[serde(default)]
    pub tolerance_minutes: Option<i64>,
    /// Optional override for the fuzzy-match acceptance threshold (0-100).
    #[serde(default)]
    pub match_threshold: Option<u32>,
    /// Optional override for the minimum gap length in minutes.
    #[serde(default)]
    pub gap_floor_minutes: Option<i64>,
}

impl ReconcileRequest {
    /// Merges request-level overrides with the server defaults.
    pub fn effective_options(&self, defaults: &ReconcileOptions) -> ReconcileOptions {
        ReconcileOptions {
            match_threshold: self.match_threshold.unwrap_or(defaults.match_threshold),
            gap_floor_minutes: self.gap_floor_minutes.unwrap_or(defaults.gap_floor_minutes),
            tolerance_minutes: self.tolerance_minutes.unwrap_or(defaults.tolerance_minutes),
        }
    }
}
