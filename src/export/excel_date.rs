// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Interpret a `YYYY-MM-DD` or `HH:MM` cell as an Excel serial value,
/// returning the number format to go with it.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(&d)));
    }

    if crate::utils::time::is_valid_time_format(s)
        && let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M")
    {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    // Excel's day zero, accounting for the 1900 leap-year bug
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    (*d - epoch).num_days() as f64
}
