//! Time utilities: HH:MM validation, durations with overnight wraparound,
//! 12/24-hour conversion and minute formatting.
//!
//! Time-of-day values travel as plain `HH:MM` strings. An empty string means
//! "not recorded" and contributes zero to every duration.

use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap());

static CLOCK_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)\s*(0?[1-9]|1[0-2]):([0-5][0-9])\s*(am|pm)\s*$").unwrap()
});

static LOOSE_24H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([01]?[0-9]|2[0-3]):([0-5][0-9])\s*$").unwrap());

/// True iff `time` is exactly `HH:MM` (00-23, 00-59). The empty string is
/// not a valid time.
pub fn is_valid_time_format(time: &str) -> bool {
    HHMM.is_match(time)
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !is_valid_time_format(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

fn minutes_since_midnight(t: &str) -> Option<i64> {
    parse_time(t).map(|nt| i64::from(nt.hour()) * 60 + i64::from(nt.minute()))
}

/// Minutes elapsed from `start` to `end`.
///
/// Returns 0 when either side is empty. When `end` is earlier than `start`
/// the interval is taken to end on the following day, so the result is
/// always in `0..=1439`. Malformed non-empty input also yields 0.
pub fn duration(start: &str, end: &str) -> i64 {
    if start.is_empty() || end.is_empty() {
        return 0;
    }

    match (minutes_since_midnight(start), minutes_since_midnight(end)) {
        (Some(s), Some(e)) => {
            let diff = e - s;
            if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
        }
        _ => 0,
    }
}

/// `90` → `"1h 30m"`.
pub fn format_duration(mins: i64) -> String {
    format!("{}h {}m", mins.div_euclid(60), mins.rem_euclid(60))
}

/// Same as [`format_duration`] but keeps a leading minus for negative values
/// (desk time can go below zero).
pub fn format_signed_duration(mins: i64) -> String {
    if mins < 0 {
        format!("-{}", format_duration(-mins))
    } else {
        format_duration(mins)
    }
}

/// `"13:05"` → `"1:05 PM"`. Empty in, empty out.
pub fn format_clock_12h(time: &str) -> String {
    let Some(t) = parse_time(time) else {
        return String::new();
    };

    let (is_pm, hour) = t.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, t.minute(), period)
}

/// `"1:05 pm"` → `"13:05"`.
pub fn parse_clock_12h(input: &str) -> Option<String> {
    let caps = CLOCK_12H.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let pm = caps[3].eq_ignore_ascii_case("pm");

    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    Some(format!("{:02}:{:02}", hour24, minute))
}

/// Normalize a user-supplied time to canonical `HH:MM`.
///
/// Accepts `HH:MM`, `H:MM`, `h:mm AM/PM` or the empty string (clears the
/// field).
pub fn normalize_time_input(input: &str) -> AppResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if let Some(t) = parse_clock_12h(trimmed) {
        return Ok(t);
    }

    if let Some(caps) = LOOSE_24H.captures(trimmed) {
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidTime(input.to_string()))?;
        return Ok(format!("{:02}:{}", hour, &caps[2]));
    }

    Err(AppError::InvalidTime(input.to_string()))
}

/// 90 minutes → 1.5 hours, rounded to two decimals.
pub fn minutes_to_decimal_hours(mins: i64) -> f64 {
    (mins as f64 / 60.0 * 100.0).round() / 100.0
}

/// Current wall-clock time truncated to the minute, as `HH:MM`.
pub fn current_time(clock: &impl Clock) -> String {
    clock.now().time().format("%H:%M").to_string()
}
