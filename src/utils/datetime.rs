//! Date and time utility functions
//!
//! Formatting for deadlines and the header clock, conversion between wall
//! clock values picked in the UI and local instants, and the ISO-8601 form
//! used in the persisted record.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Timelike, Utc};

/// Deadline format matching the browser's en-US `short month, numeric day, year, 2-digit 12h time`
pub const DEFAULT_DEADLINE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Header clock format (`03:04:05 PM`)
pub const DEFAULT_CLOCK_FORMAT: &str = "%I:%M:%S %p";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Check that a strftime pattern contains no invalid specifiers
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a deadline for display in the task list
pub fn format_deadline(deadline: &DateTime<Local>, format: &str) -> String {
    deadline.format(format).to_string()
}

/// Format the header clock
pub fn format_clock(now: &DateTime<Local>, format: &str) -> String {
    now.format(format).to_string()
}

/// Serialize an instant the way browsers do (`2024-02-10T14:30:00.000Z`)
pub fn to_iso_string(dt: &DateTime<Local>) -> String {
    dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 timestamp into local time
///
/// Accepts RFC 3339 with any offset, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// interpreted as local wall-clock time.
pub fn parse_iso(s: &str) -> Result<DateTime<Local>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Local)),
        Err(rfc_err) => match s.parse::<NaiveDateTime>() {
            Ok(naive) => Ok(local_from_naive(naive)),
            Err(_) => Err(rfc_err),
        },
    }
}

/// Resolve a wall-clock value picked in the UI to a local instant
///
/// Ambiguous times (DST fold) take the earlier instant; times inside a DST
/// gap are pushed forward by the length of the gap (one hour), so 02:30 on a
/// spring-forward night becomes 03:30 of the same day.
pub fn local_from_naive(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + chrono::Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// Current local wall-clock time truncated to the minute
pub fn now_to_minute() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

/// Zero the seconds and sub-second part
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0).and_then(|d| d.with_nanosecond(0)).unwrap_or(dt)
}

/// Number of days in a month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month.wrapping_sub(1) as usize).copied().unwrap_or("")
}
