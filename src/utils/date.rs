use crate::utils::clock::Clock;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.now().date()
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_str(clock: &impl Clock) -> String {
    format_date(&today(clock))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// `"2024-01-01"` → `"Monday, January 1, 2024"`. Empty or unparseable input
/// yields an empty string.
pub fn format_long_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%A, %B %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// Resolve an optional CLI date argument, defaulting to today.
pub fn resolve_date(arg: Option<&str>, clock: &impl Clock) -> Option<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Some(today(clock)),
    }
}
