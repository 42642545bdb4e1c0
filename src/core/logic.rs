use crate::core::calculator::summary::calculate_summary;
use crate::models::{DaySummary, Entry};
use crate::utils::time::{format_duration, format_signed_duration};

/// Summary figures as shown to the user. Office and desk read `--` until
/// both office times are recorded; lunch reads `--` until both lunch times
/// are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText {
    pub office: String,
    pub lunch: String,
    pub breaks: String,
    pub desk: String,
}

pub struct Core;

impl Core {
    pub fn build_daily_summary(entry: &Entry) -> DaySummary {
        calculate_summary(entry)
    }

    pub fn summary_text(entry: &Entry, summary: &DaySummary) -> SummaryText {
        let placeholder = || "--".to_string();
        let office_known = entry.has_office_times();

        SummaryText {
            office: if office_known {
                format_duration(summary.office_minutes)
            } else {
                placeholder()
            },
            lunch: if entry.has_lunch() {
                format_duration(summary.lunch_minutes)
            } else {
                placeholder()
            },
            breaks: format_duration(summary.breaks_minutes),
            desk: if office_known {
                format_signed_duration(summary.desk_minutes)
            } else {
                placeholder()
            },
        }
    }
}
