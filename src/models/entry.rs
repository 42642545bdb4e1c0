use super::{break_interval::BreakInterval, time_field::TimeField};
use crate::utils::time::is_valid_time_format;
use serde::{Deserialize, Serialize};

/// One calendar day's record. `date` (`YYYY-MM-DD`) is the natural key;
/// `id` is incidental. Empty time fields mean "not recorded".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub office_in: String,
    #[serde(default)]
    pub office_out: String,
    #[serde(default)]
    pub lunch_start: String,
    #[serde(default)]
    pub lunch_end: String,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    #[serde(default)]
    pub report: String,
}

impl Entry {
    /// A fresh, unsaved entry for `date` with every field empty.
    pub fn new(date: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: date.to_string(),
            office_in: String::new(),
            office_out: String::new(),
            lunch_start: String::new(),
            lunch_end: String::new(),
            breaks: Vec::new(),
            report: String::new(),
        }
    }

    pub fn time(&self, field: TimeField) -> &str {
        match field {
            TimeField::OfficeIn => &self.office_in,
            TimeField::OfficeOut => &self.office_out,
            TimeField::LunchStart => &self.lunch_start,
            TimeField::LunchEnd => &self.lunch_end,
        }
    }

    pub fn set_time(&mut self, field: TimeField, value: &str) {
        let slot = match field {
            TimeField::OfficeIn => &mut self.office_in,
            TimeField::OfficeOut => &mut self.office_out,
            TimeField::LunchStart => &mut self.lunch_start,
            TimeField::LunchEnd => &mut self.lunch_end,
        };
        *slot = value.to_string();
    }

    /// Appends an empty break and returns its id.
    pub fn add_break(&mut self) -> String {
        self.add_break_with("", "")
    }

    pub fn add_break_with(&mut self, start: &str, end: &str) -> String {
        let b = BreakInterval::with_times(start, end);
        let id = b.id.clone();
        self.breaks.push(b);
        id
    }

    /// Updates the given endpoints of break `id`. Returns false when no break
    /// has that id.
    pub fn update_break(&mut self, id: &str, start: Option<&str>, end: Option<&str>) -> bool {
        let Some(b) = self.breaks.iter_mut().find(|b| b.id == id) else {
            return false;
        };

        if let Some(s) = start {
            b.start_time = s.to_string();
        }
        if let Some(e) = end {
            b.end_time = e.to_string();
        }
        true
    }

    pub fn remove_break(&mut self, id: &str) -> bool {
        let before = self.breaks.len();
        self.breaks.retain(|b| b.id != id);
        self.breaks.len() != before
    }

    /// Id of the break at 1-based position `index`.
    pub fn break_id_at(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.breaks.get(i))
            .map(|b| b.id.as_str())
    }

    pub fn set_report(&mut self, text: &str) {
        self.report = text.to_string();
    }

    /// (characters, words) of the report text.
    pub fn report_stats(&self) -> (usize, usize) {
        (
            self.report.chars().count(),
            self.report.split_whitespace().count(),
        )
    }

    /// Office in/out must each be empty or a valid `HH:MM`.
    pub fn is_valid(&self) -> bool {
        [&self.office_in, &self.office_out]
            .iter()
            .all(|t| t.is_empty() || is_valid_time_format(t))
    }

    pub fn has_office_times(&self) -> bool {
        !self.office_in.is_empty() && !self.office_out.is_empty()
    }

    pub fn has_lunch(&self) -> bool {
        !self.lunch_start.is_empty() && !self.lunch_end.is_empty()
    }
}
