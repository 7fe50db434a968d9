//! Date helpers for expense dates
//!
//! Expense dates travel as "YYYY-MM-DD" strings and are parsed leniently at
//! the point of use: a date that fails to parse never raises an error, it
//! just falls out of range checks and lands in the invalid trend bucket.

use chrono::{Datelike, NaiveDate, Utc};

/// Parse a "YYYY-MM-DD" string, `None` if malformed
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive range check against optional bounds.
///
/// With no bounds set every date passes, parseable or not. Once either bound
/// is set, a date that fails to parse fails the check.
pub fn in_range(date: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let parsed = match parse_date(date) {
        Some(d) => d,
        None => return false,
    };
    if let Some(start) = start {
        if parsed < start {
            return false;
        }
    }
    if let Some(end) = end {
        if parsed > end {
            return false;
        }
    }
    true
}

/// Bucket key for monthly grouping, `None` for unparseable dates
pub fn month_key(date: &str) -> Option<(i32, u32)> {
    parse_date(date).map(|d| (d.year(), d.month()))
}

/// Three-letter English month abbreviation
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

/// Human-readable form like "Jan 15, 2024", or "Invalid date" when the
/// input does not parse
pub fn format_long(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "Invalid date".to_string(),
    }
}

/// Today's date as "YYYY-MM-DD"
pub fn today_string() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
