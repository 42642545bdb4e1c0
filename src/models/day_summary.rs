use serde::Serialize;

/// Figures derived from an entry. Always recomputed, never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub office_minutes: i64,
    pub lunch_minutes: i64,
    pub breaks_minutes: i64,
    /// office - lunch - breaks; negative when breaks are over-reported.
    pub desk_minutes: i64,
}

impl DaySummary {
    /// Lunch plus every other break.
    pub fn total_break_minutes(&self) -> i64 {
        self.lunch_minutes + self.breaks_minutes
    }
}
