use crate::core::calculator::breaks::total_break_minutes;
use crate::models::{DaySummary, Entry};
use crate::utils::time::duration;

pub fn calculate_summary(entry: &Entry) -> DaySummary {
    let office_minutes = duration(&entry.office_in, &entry.office_out);
    let lunch_minutes = duration(&entry.lunch_start, &entry.lunch_end);
    let breaks_minutes = total_break_minutes(&entry.breaks);

    DaySummary {
        office_minutes,
        lunch_minutes,
        breaks_minutes,
        desk_minutes: office_minutes - lunch_minutes - breaks_minutes,
    }
}
