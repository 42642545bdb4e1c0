//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pads on the right by display width, so labels with accents or emoji
/// still line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Horizontal rule made of `ch` repeated `width` times.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}

/// A time-of-day value for display; empty becomes "--:--".
pub fn display_time(value: &str, twelve_hour: bool) -> String {
    if value.is_empty() {
        return "--:--".to_string();
    }
    if twelve_hour {
        let t = crate::utils::time::format_clock_12h(value);
        if !t.is_empty() {
            return t;
        }
    }
    value.to_string()
}
