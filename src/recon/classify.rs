//! Gap/break classification.
//!
//! State-free per-employee classification of a detected clock gap against a
//! matched break-sheet entry under a minute tolerance. The decision table is
//! evaluated in a fixed order; the logged duration prefers the parsed
//! actual-range annotation over the declared duration.

use crate::models::{BreakSheetEntry, DiffStatus, TimecardGap};

/// The outcome of classifying one employee's gap/break pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The discrepancy status.
    pub status: DiffStatus,
    /// Signed gap-minus-logged difference in minutes, where defined.
    pub discrepancy_minutes: Option<i64>,
    /// Human-readable explanation.
    pub message: String,
}

/// Classifies a detected gap against a matched break entry.
///
/// Decision table, evaluated in order:
///
/// | gap | break entry | logged minutes | outcome |
/// |---|---|---|---|
/// | yes | yes | unknown              | warning, discrepancy absent |
/// | yes | yes | within tolerance     | match, discrepancy 0 |
/// | yes | yes | beyond tolerance     | mismatch, discrepancy gap−logged |
/// | yes | no  | —                    | deletion, discrepancy = gap minutes |
/// | no  | yes | known                | warning, discrepancy = −logged |
/// | no  | yes | unknown              | warning, discrepancy absent |
/// | no  | no  | —                    | match, "no break required" |
///
/// # Example
///
/// ```
/// use break_audit::models::DiffStatus;
/// use break_audit::recon::classify;
///
/// let result = classify(None, None, 5);
/// assert_eq!(result.status, DiffStatus::Match);
/// assert_eq!(result.discrepancy_minutes, None);
/// ```
pub fn classify(
    gap: Option<&TimecardGap>,
    break_entry: Option<&BreakSheetEntry>,
    tolerance_minutes: i64,
) -> Classification {
    match (gap, break_entry) {
        (Some(gap), Some(entry)) => match entry.logged_minutes() {
            None => Classification {
                status: DiffStatus::Warning,
                discrepancy_minutes: None,
                message: format!(
                    "Gap of {}m found but the logged break duration is unspecified",
                    gap.gap_minutes
                ),
            },
            Some(logged) => {
                let difference = gap.gap_minutes - logged;
                if difference.abs() <= tolerance_minutes {
                    Classification {
                        status: DiffStatus::Match,
                        discrepancy_minutes: Some(0),
                        message: format!(
                            "Gap of {}m matches logged break of {}m within {}m tolerance",
                            gap.gap_minutes, logged, tolerance_minutes
                        ),
                    }
                } else {
                    Classification {
                        status: DiffStatus::Mismatch,
                        discrepancy_minutes: Some(difference),
                        message: format!(
                            "Gap of {}m differs from logged break of {}m by {}m",
                            gap.gap_minutes, logged, difference
                        ),
                    }
                }
            }
        },
        (Some(gap), None) => Classification {
            status: DiffStatus::Deletion,
            discrepancy_minutes: Some(gap.gap_minutes),
            message: format!(
                "Gap of {}m found but no logged break on the break sheet",
                gap.gap_minutes
            ),
        },
        (None, Some(entry)) => match entry.logged_minutes() {
            Some(logged) => Classification {
                status: DiffStatus::Warning,
                discrepancy_minutes: Some(-logged),
                message: format!(
                    "Break of {logged}m logged but no matching gap in the timecard"
                ),
            },
            None => Classification {
                status: DiffStatus::Warning,
                discrepancy_minutes: None,
                message: "Break sheet entry found but no gap was detected and no duration was logged"
                    .to_string(),
            },
        },
        (None, None) => Classification {
            status: DiffStatus::Match,
            discrepancy_minutes: None,
            message: "No break required".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreakTimeRange;
    use chrono::NaiveTime;

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn gap(minutes: i64) -> TimecardGap {
        TimecardGap {
            employee_id: "104".to_string(),
            employee_name: "Acosta, Geovanny".to_string(),
            gap_start: make_time("12:45"),
            gap_end: make_time("13:13"),
            gap_minutes: minutes,
        }
    }

    fn entry_with_declared(minutes: Option<i64>) -> BreakSheetEntry {
        BreakSheetEntry {
            worker_name: "Acosta, Geovanny".to_string(),
            declared_minutes: minutes,
            time_range: None,
            has_remarks: false,
        }
    }

    fn entry_with_actual(actual: i64, declared: Option<i64>) -> BreakSheetEntry {
        BreakSheetEntry {
            worker_name: "Acosta, Geovanny".to_string(),
            declared_minutes: declared,
            time_range: Some(BreakTimeRange {
                start: Some(make_time("12:45")),
                end: Some(make_time("13:13")),
                actual_minutes: Some(actual),
            }),
            has_remarks: false,
        }
    }

    // ==========================================================================
    // CL-001: gap + entry, duration unknown -> warning
    // ==========================================================================
    #[test]
    fn test_cl_001_gap_with_unspecified_duration_is_warning() {
        let g = gap(28);
        let e = entry_with_declared(None);
        let result = classify(Some(&g), Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Warning);
        assert_eq!(result.discrepancy_minutes, None);
        assert!(result.message.contains("unspecified"));
    }

    // ==========================================================================
    // CL-002: gap + entry within tolerance -> match, discrepancy exactly 0
    // ==========================================================================
    #[test]
    fn test_cl_002_within_tolerance_is_match_with_zero_discrepancy() {
        let g = gap(28);
        let e = entry_with_actual(28, Some(15));
        let result = classify(Some(&g), Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Match);
        assert_eq!(result.discrepancy_minutes, Some(0));
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let g = gap(30);
        let e = entry_with_declared(Some(25));
        let result = classify(Some(&g), Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Match);
        assert_eq!(result.discrepancy_minutes, Some(0));
    }

    // ==========================================================================
    // CL-003: gap + entry beyond tolerance -> mismatch, signed discrepancy
    // ==========================================================================
    #[test]
    fn test_cl_003_beyond_tolerance_is_mismatch_with_signed_discrepancy() {
        let g = gap(28);
        let e = entry_with_declared(Some(15));
        let result = classify(Some(&g), Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Mismatch);
        assert_eq!(result.discrepancy_minutes, Some(13));
    }

    #[test]
    fn test_mismatch_discrepancy_can_be_negative() {
        let g = gap(15);
        let e = entry_with_declared(Some(45));
        let result = classify(Some(&g), Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Mismatch);
        assert_eq!(result.discrepancy_minutes, Some(-30));
    }

    // ==========================================================================
    // CL-004: gap without entry -> deletion, discrepancy = gap minutes
    // ==========================================================================
    #[test]
    fn test_cl_004_gap_without_entry_is_deletion() {
        let g = gap(28);
        let result = classify(Some(&g), None, 5);
        assert_eq!(result.status, DiffStatus::Deletion);
        assert_eq!(result.discrepancy_minutes, Some(28));
        assert!(result.message.contains("no logged break"));
    }

    // ==========================================================================
    // CL-005: entry without gap, duration known -> warning, negative discrepancy
    // ==========================================================================
    #[test]
    fn test_cl_005_logged_break_without_gap_is_warning() {
        let e = entry_with_declared(Some(30));
        let result = classify(None, Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Warning);
        assert_eq!(result.discrepancy_minutes, Some(-30));
        assert!(result.message.contains("no matching gap"));
    }

    // ==========================================================================
    // CL-006: entry without gap, duration unknown -> warning, discrepancy absent
    // ==========================================================================
    #[test]
    fn test_cl_006_entry_without_gap_or_duration_is_warning() {
        let e = entry_with_declared(None);
        let result = classify(None, Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Warning);
        assert_eq!(result.discrepancy_minutes, None);
    }

    // ==========================================================================
    // CL-007: neither gap nor entry -> match, "no break required"
    // ==========================================================================
    #[test]
    fn test_cl_007_neither_present_is_match() {
        let result = classify(None, None, 5);
        assert_eq!(result.status, DiffStatus::Match);
        assert_eq!(result.discrepancy_minutes, None);
        assert_eq!(result.message, "No break required");
    }

    #[test]
    fn test_actual_range_duration_preferred_over_declared() {
        // Declared 15 would mismatch; actual 28 matches the 28m gap.
        let g = gap(28);
        let e = entry_with_actual(28, Some(15));
        let result = classify(Some(&g), Some(&e), 5);
        assert_eq!(result.status, DiffStatus::Match);
    }

    #[test]
    fn test_tolerance_is_a_parameter() {
        let g = gap(28);
        let e = entry_with_declared(Some(15));
        assert_eq!(classify(Some(&g), Some(&e), 5).status, DiffStatus::Mismatch);
        assert_eq!(classify(Some(&g), Some(&e), 13).status, DiffStatus::Match);
    }
}
