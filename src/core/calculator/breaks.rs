use crate::models::BreakInterval;
use crate::utils::time::duration;

/// Sum of every break's duration. Breaks with an empty endpoint count as 0.
///
/// Overlapping breaks are not merged, so overlapping time is counted twice.
pub fn total_break_minutes(breaks: &[BreakInterval]) -> i64 {
    breaks
        .iter()
        .map(|b| duration(&b.start_time, &b.end_time))
        .sum()
}
