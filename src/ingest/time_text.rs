//! Free-text time and duration parsing.
//!
//! The break sheet and timecard carry clock times and durations as loose
//! text ("9:50am", "15 minutes", "12:45pm - 1:13pm (28m)"). These parsers
//! extract canonical values and return `None` on anything unparseable; they
//! never fail a row.

use chrono::NaiveTime;
use regex::Regex;

use crate::models::BreakTimeRange;

/// Clock-time formats tried in priority order: space-separated meridiem
/// first, then the no-space form. `%p` accepts either case.
const CLOCK_FORMATS: [&str; 2] = ["%I:%M %p", "%I:%M%p"];

/// Parses a 12-hour clock string such as "09:50 AM", "9:50am", or "9:50AM".
///
/// Formats are tried in a fixed priority order and the first that yields a
/// valid time wins. Returns `None` for empty input or total parse failure.
///
/// # Example
///
/// ```
/// use break_audit::ingest::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_clock_time("9:50am"),
///     Some(NaiveTime::from_hms_opt(9, 50, 0).unwrap())
/// );
/// assert_eq!(parse_clock_time(""), None);
/// ```
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
}

/// Parses a break-duration phrase into minutes.
///
/// The compound phrase "30 and 15" means two consecutive breaks and maps to
/// 45 as a fixed special case, regardless of surrounding text. Otherwise the
/// first integer immediately followed by a minute token ("minutes",
/// "minute", "mins", "min") is extracted. Returns `None` when neither
/// pattern is present.
///
/// # Example
///
/// ```
/// use break_audit::ingest::parse_duration_text;
///
/// assert_eq!(parse_duration_text("15 minutes"), Some(15));
/// assert_eq!(parse_duration_text("30 and 15"), Some(45));
/// assert_eq!(parse_duration_text("none taken"), None);
/// ```
pub fn parse_duration_text(text: &str) -> Option<i64> {
    let compound_re = Regex::new(r"(?i)\b30\s+and\s+15\b").unwrap();
    if compound_re.is_match(text) {
        return Some(45);
    }

    let minutes_re = Regex::new(r"(?i)\b(\d+)\s*(?:minutes?|mins?)\b").unwrap();
    minutes_re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Parses a break time-range cell such as "12:45pm - 1:13pm (28m)".
///
/// The `<time> - <time>` pair and the parenthesized `(Nm)` actual-duration
/// annotation are extracted independently; any sub-field may be absent
/// without invalidating the others. Returns `None` only when no time-range
/// pattern is found at all.
///
/// # Example
///
/// ```
/// use break_audit::ingest::parse_time_range;
///
/// let range = parse_time_range("12:45pm - 1:13pm (28m)").unwrap();
/// assert_eq!(range.actual_minutes, Some(28));
/// assert!(range.start.is_some());
/// assert!(range.end.is_some());
/// ```
pub fn parse_time_range(text: &str) -> Option<BreakTimeRange> {
    let range_re = Regex::new(
        r"(?i)(\d{1,2}:\d{2}\s*(?:am|pm)?)\s*-\s*(\d{1,2}:\d{2}\s*(?:am|pm)?)",
    )
    .unwrap();
    let caps = range_re.captures(text)?;

    let start = caps.get(1).and_then(|m| parse_clock_time(m.as_str()));
    let end = caps.get(2).and_then(|m| parse_clock_time(m.as_str()));

    let actual_re = Regex::new(r"(?i)\((\d+)\s*m(?:in(?:ute)?s?)?\)").unwrap();
    let actual_minutes = actual_re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok());

    Some(BreakTimeRange {
        start,
        end,
        actual_minutes,
    })
}
