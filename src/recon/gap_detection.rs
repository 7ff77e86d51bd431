//! Clock-gap detection.
//!
//! Derives candidate break intervals from an employee's punch sequence: the
//! span between one pair's clock-out and the next pair's clock-in. Gaps at
//! or below the floor are discarded as punch-rounding artifacts.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{TimecardEntry, TimecardGap};

/// Detects clock gaps per employee on the target date.
///
/// Entries are filtered to `target_date` and grouped by employee id.
/// Within a group, entries lacking a clock-in are excluded and the rest are
/// sorted ascending by clock-in time. For each adjacent pair, a gap is
/// emitted when the earlier pair has a clock-out and the span to the next
/// clock-in strictly exceeds `gap_floor_minutes`.
///
/// All qualifying gaps are returned in employee-id order, earliest first
/// within an employee. The reconciliation driver uses only the first gap per
/// employee; that first-found behavior is a known limitation carried from
/// the original process.
///
/// # Example
///
/// ```
/// use break_audit::ingest::parse_timecard;
/// use break_audit::recon::detect_gaps;
/// use chrono::NaiveDate;
///
/// let csv = "\
/// Payroll Name,File Number,Pay Date,Time In,Time Out,Hours
/// \"Acosta, Geovanny\",104,01/15/2026,09:00 AM,12:45 PM,3.75
/// \"Acosta, Geovanny\",104,01/15/2026,01:13 PM,05:30 PM,4.28
/// ";
/// let entries = parse_timecard(csv).unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let gaps = detect_gaps(&entries, date, 10);
/// assert_eq!(gaps.len(), 1);
/// assert_eq!(gaps[0].gap_minutes, 28);
/// ```
pub fn detect_gaps(
    entries: &[TimecardEntry],
    target_date: NaiveDate,
    gap_floor_minutes: i64,
) -> Vec<TimecardGap> {
    let mut by_employee: BTreeMap<&str, Vec<&TimecardEntry>> = BTreeMap::new();
    for entry in entries {
        if entry.work_date == target_date && entry.clock_in.is_some() {
            by_employee
                .entry(entry.employee_id.as_str())
                .or_default()
                .push(entry);
        }
    }

    let mut gaps = Vec::new();

    for (employee_id, mut group) in by_employee {
        group.sort_by_key(|entry| entry.clock_in);

        for pair in group.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let (Some(gap_start), Some(gap_end)) = (current.clock_out, next.clock_in) else {
                // An open punch pair cannot bound a gap.
                continue;
            };

            let gap_minutes = (gap_end - gap_start).num_minutes();
            if gap_minutes > gap_floor_minutes {
                gaps.push(TimecardGap {
                    employee_id: employee_id.to_string(),
                    employee_name: current.employee_name.clone(),
                    gap_start,
                    gap_end,
                    gap_minutes,
                });
            }
        }
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn entry(id: &str, date: &str, clock_in: Option<&str>, clock_out: Option<&str>) -> TimecardEntry {
        TimecardEntry {
            employee_name: format!("Employee {id}"),
            employee_id: id.to_string(),
            work_date: make_date(date),
            clock_in: clock_in.map(make_time),
            clock_out: clock_out.map(make_time),
            shift_hours: Decimal::ZERO,
        }
    }

    #[test]
    fn test_single_gap_between_punch_pairs() {
        let entries = vec![
            entry("104", "2026-01-15", Some("09:00"), Some("12:45")),
            entry("104", "2026-01-15", Some("13:13"), Some("17:30")),
        ];
        let gaps = detect_gaps(&entries, make_date("2026-01-15"), 10);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].employee_id, "104");
        assert_eq!(gaps[0].gap_start, make_time("12:45"));
        assert_eq!(gaps[0].gap_end, make_time("13:13"));
        assert_eq!(gaps[0].gap_minutes, 28);
    }

    #[test]
    fn test_gap_floor_boundary() {
        // Exactly 10 minutes is excluded; 11 minutes is included.
        let at_floor = vec![
            entry("104", "2026-01-15", Some("09:00"), Some("12:00")),
            entry("104", "2026-01-15", Some("12:10"), Some("17:00")),
        ];
        assert!(detect_gaps(&at_floor, make_date("2026-01-15"), 10).is_empty());

        let above_floor = vec![
            entry("104", "2026-01-15", Some("09:00"), Some("12:00")),
            entry("104", "2026-01-15", Some("12:11"), Some("17:00")),
        ];
        let gaps = detect_gaps(&above_floor, make_date("2026-01-15"), 10);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_minutes, 11);
    }

    #[test]
    fn test_other_dates_filtered_out() {
        let entries = vec![
            entry("104", "2026-01-14", Some("09:00"), Some("12:00")),
            entry("104", "2026-01-14", Some("13:00"), Some("17:00")),
        ];
        assert!(detect_gaps(&entries, make_date("2026-01-15"), 10).is_empty());
    }

    #[test]
    fn test_entries_without_clock_in_excluded() {
        let entries = vec![
            entry("104", "2026-01-15", Some("09:00"), Some("12:00")),
            entry("104", "2026-01-15", None, Some("17:00")),
        ];
        assert!(detect_gaps(&entries, make_date("2026-01-15"), 10).is_empty());
    }

    #[test]
    fn test_missing_clock_out_cannot_bound_gap() {
        let entries = vec![
            entry("104", "2026-01-15", Some("09:00"), None),
            entry("104", "2026-01-15", Some("13:00"), Some("17:00")),
        ];
        assert!(detect_gaps(&entries, make_date("2026-01-15"), 10).is_empty());
    }

    #[test]
    fn test_unsorted_input_sorted_by_clock_in() {
        let entries = vec![
            entry("104", "2026-01-15", Some("13:13"), Some("17:30")),
            entry("104", "2026-01-15", Some("09:00"), Some("12:45")),
        ];
        let gaps = detect_gaps(&entries, make_date("2026-01-15"), 10);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_minutes, 28);
    }

    #[test]
    fn test_multiple_employees_grouped_independently() {
        let entries = vec![
            entry("104", "2026-01-15", Some("09:00"), Some("12:00")),
            entry("201", "2026-01-15", Some("09:00"), Some("12:30")),
            entry("104", "2026-01-15", Some("12:30"), Some("17:00")),
            entry("201", "2026-01-15", Some("13:00"), Some("17:00")),
        ];
        let gaps = detect_gaps(&entries, make_date("2026-01-15"), 10);
        assert_eq!(gaps.len(), 2);
        // BTreeMap grouping yields deterministic employee-id order.
        assert_eq!(gaps[0].employee_id, "104");
        assert_eq!(gaps[0].gap_minutes, 30);
        assert_eq!(gaps[1].employee_id, "201");
        assert_eq!(gaps[1].gap_minutes, 30);
    }

    #[test]
    fn test_three_punch_pairs_yield_two_gaps() {
        let entries = vec![
            entry("104", "2026-01-15", Some("08:00"), Some("10:00")),
            entry("104", "2026-01-15", Some("10:30"), Some("13:00")),
            entry("104", "2026-01-15", Some("14:00"), Some("17:00")),
        ];
        let gaps = detect_gaps(&entries, make_date("2026-01-15"), 10);
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].gap_minutes, 30);
        assert_eq!(gaps[1].gap_minutes, 60);
    }

    #[test]
    fn test_gap_floor_is_a_parameter() {
        let entries = vec![
            entry("104", "2026-01-15", Some("09:00"), Some("12:00")),
            entry("104", "2026-01-15", Some("12:08"), Some("17:00")),
        ];
        assert!(detect_gaps(&entries, make_date("2026-01-15"), 10).is_empty());
        let gaps = detect_gaps(&entries, make_date("2026-01-15"), 5);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_minutes, 8);
    }
}
