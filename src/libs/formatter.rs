//! Date parsing and formatting for task due dates.
//!
//! Due dates arrive as free text from the console. The accepted shapes are:
//!
//! - `MM/DD/YYYY` (what the prompt asks for), optionally followed by `HH:MM[:SS]`
//! - `YYYY-MM-DD`, optionally followed by `HH:MM[:SS]` (space or `T` separated)
//! - RFC 3339 timestamps, converted to local time
//!
//! A date without a time of day means midnight. Anything else is rejected
//! and the caller substitutes its default.
//!
//! ## Examples
//!
//! ```rust
//! use taskman::libs::formatter::{format_short_date, parse_due_date};
//!
//! let due = parse_due_date("12/24/2026").unwrap();
//! assert_eq!(format_short_date(&due), "12/24/2026");
//! assert!(parse_due_date("next friday").is_none());
//! ```

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];
const DATE_TIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses free-text due date input, returning `None` when nothing matches.
pub fn parse_due_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(input, format) {
            return Some(date_time);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|date_time| date_time.with_timezone(&Local).naive_local())
}

/// Formats a date as `MM/DD/YYYY`, the short form used in listings.
pub fn format_short_date(date: &NaiveDateTime) -> String {
    date.format("%m/%d/%Y").to_string()
}
