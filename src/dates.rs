// src/dates.rs
//
// Display formatting for the API's ISO date strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// Short US date, e.g. "Jan 5, 2024".
const SHORT_DATE: &str = "%b %-d, %Y";
const SHORT_DATE_PARSE: &str = "%b %d, %Y";

/// Naive date-time shapes: `T` or space separator, seconds and fraction optional.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Same shapes with a trailing offset (`+HH:MM` or `+HHMM`; `Z` is rewritten to `+0000`).
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
];

/// Reduced-precision ISO forms: `YYYY-MM` and `YYYY` mean the first day.
fn parse_reduced(s: &str) -> Option<NaiveDate> {
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('-') {
        None if s.len() == 4 && all_digits(s) => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        Some((y, m)) if y.len() == 4 && m.len() == 2 && all_digits(y) && all_digits(m) => {
            NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, 1)
        }
        _ => None,
    }
}

/// Parse anything the API (or an earlier formatting pass) hands us.
/// Timestamps with an offset are read in UTC, so the calendar day never
/// depends on the machine's time zone.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    let zoned = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+0000"),
        None => s!(s),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    parse_reduced(s).or_else(|| NaiveDate::parse_from_str(s, SHORT_DATE_PARSE).ok())
}

/// Format an ISO date string as a short date ("Jan 5, 2024").
/// Already formatted input comes back unchanged; garbage becomes "Invalid Date".
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(d) => d.format(SHORT_DATE).to_string(),
        None => s!(INVALID_DATE),
    }
}

/// Generation stamp printed under the PDF title, e.g. "1/5/2024, 3:04:05 PM".
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
