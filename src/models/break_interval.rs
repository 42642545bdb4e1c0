use serde::{Deserialize, Serialize};

/// An ad-hoc break within a day. `id` only identifies the break for updates
/// and deletion; it carries no ordering meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakInterval {
    pub id: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl BreakInterval {
    /// A new break with a fresh id and both endpoints unset.
    pub fn new() -> Self {
        Self::with_times("", "")
    }

    pub fn with_times(start: &str, end: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    pub fn minutes(&self) -> i64 {
        crate::utils::time::duration(&self.start_time, &self.end_time)
    }
}

impl Default for BreakInterval {
    fn default() -> Self {
        Self::new()
    }
}
