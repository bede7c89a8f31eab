// Posted Time - normalizes "8 minutes ago" / date strings into a comparable value

use super::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR, MINUTES_PER_MINUTE, UNPARSED_SORT_KEY};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static RELATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+([a-zA-Z]+)\s+ago$").expect("relative time regex is valid")
});

/// Naive formats tried after RFC 3339 / RFC 2822, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

const MILLIS_PER_MINUTE: i64 = 60_000;

/// When a job was posted.
///
/// Parsing never fails: input that is neither a relative phrase nor a
/// recognized date becomes [`PostedTime::Unparsed`], which sorts as age 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostedTime {
    /// "<n> <unit> ago", stored as minutes in the past
    Relative { minutes: i64 },
    /// Absolute point in time
    Absolute { at: DateTime<Utc> },
    Unparsed,
}

impl PostedTime {
    /// Age in minutes relative to `now_millis` (epoch ms). Larger = older.
    pub fn minutes_ago(&self, now_millis: i64) -> i64 {
        match self {
            PostedTime::Relative { minutes } => *minutes,
            PostedTime::Absolute { at } => {
                now_millis.saturating_sub(at.timestamp_millis()) / MILLIS_PER_MINUTE
            }
            PostedTime::Unparsed => UNPARSED_SORT_KEY,
        }
    }

    pub fn is_parsed(&self) -> bool {
        !matches!(self, PostedTime::Unparsed)
    }
}

impl std::fmt::Display for PostedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostedTime::Relative { minutes } => {
                let (amount, unit) = largest_exact_unit(*minutes);
                let plural = if amount == 1 { "" } else { "s" };
                write!(f, "{} {}{} ago", amount, unit, plural)
            }
            PostedTime::Absolute { at } => write!(f, "{}", at.format("%Y-%m-%d %H:%M UTC")),
            PostedTime::Unparsed => write!(f, "unknown"),
        }
    }
}

fn largest_exact_unit(minutes: i64) -> (i64, &'static str) {
    if minutes != 0 && minutes % MINUTES_PER_DAY == 0 {
        (minutes / MINUTES_PER_DAY, "day")
    } else if minutes != 0 && minutes % MINUTES_PER_HOUR == 0 {
        (minutes / MINUTES_PER_HOUR, "hour")
    } else {
        (minutes, "minute")
    }
}

/// Normalize a raw "Posted" value.
///
/// Relative phrases match `^(\d+)\s+([a-zA-Z]+)\s+ago$` after trimming.
/// A phrase with an unknown unit (or one that overflows) is `Unparsed`
/// and is not retried as a date.
pub fn normalize(raw: &str) -> PostedTime {
    let trimmed = raw.trim();

    if let Some(caps) = RELATIVE_PATTERN.captures(trimmed) {
        return parse_relative(&caps[1], &caps[2]).unwrap_or(PostedTime::Unparsed);
    }

    parse_absolute(trimmed)
        .map(|at| PostedTime::Absolute { at })
        .unwrap_or(PostedTime::Unparsed)
}

fn unit_multiplier(unit: &str) -> Option<i64> {
    match unit.to_ascii_lowercase().as_str() {
        "minute" | "minutes" => Some(MINUTES_PER_MINUTE),
        "hour" | "hours" => Some(MINUTES_PER_HOUR),
        "day" | "days" => Some(MINUTES_PER_DAY),
        _ => None,
    }
}

fn parse_relative(quantity: &str, unit: &str) -> Option<PostedTime> {
    let quantity: i64 = quantity.parse().ok()?;
    let minutes = quantity.checked_mul(unit_multiplier(unit)?)?;
    Some(PostedTime::Relative { minutes })
}

fn parse_absolute(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, NAIVE_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
