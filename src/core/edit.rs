//! Field-level edits applied to the session's current entry. Nothing here
//! persists; callers save the session afterwards.

use crate::core::session::EntrySession;
use crate::db::kv::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::TimeField;
use crate::utils::clock::Clock;
use crate::utils::time::normalize_time_input;

pub struct EditLogic;

impl EditLogic {
    /// Apply raw user input to time fields. Each value is normalized to
    /// `HH:MM` (empty clears the field); `now` stamps one field with the
    /// current time afterwards. Returns the fields that were changed with
    /// their new values.
    pub fn apply_times<K: KvStore, C: Clock>(
        session: &mut EntrySession<K, C>,
        updates: &[(TimeField, &str)],
        now: Option<TimeField>,
    ) -> AppResult<Vec<(TimeField, String)>> {
        // validate everything before touching the entry
        let normalized = updates
            .iter()
            .map(|(f, raw)| normalize_time_input(raw).map(|v| (*f, v)))
            .collect::<AppResult<Vec<_>>>()?;

        let mut changed = Vec::new();
        for (field, value) in normalized {
            session.current_mut().set_time(field, &value);
            changed.push((field, value));
        }

        if let Some(field) = now {
            let value = session.stamp_now(field);
            changed.push((field, value));
        }

        Ok(changed)
    }

    pub fn add_break<K: KvStore, C: Clock>(
        session: &mut EntrySession<K, C>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<String> {
        let start = normalize_time_input(start.unwrap_or(""))?;
        let end = normalize_time_input(end.unwrap_or(""))?;
        Ok(session.current_mut().add_break_with(&start, &end))
    }

    /// Update the break at 1-based `index`.
    pub fn edit_break<K: KvStore, C: Clock>(
        session: &mut EntrySession<K, C>,
        index: usize,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<()> {
        let start = start.map(normalize_time_input).transpose()?;
        let end = end.map(normalize_time_input).transpose()?;

        let entry = session.current_mut();
        let id = entry
            .break_id_at(index)
            .ok_or(AppError::InvalidBreak(index))?
            .to_string();

        entry.update_break(&id, start.as_deref(), end.as_deref());
        Ok(())
    }

    pub fn remove_break<K: KvStore, C: Clock>(
        session: &mut EntrySession<K, C>,
        index: usize,
    ) -> AppResult<()> {
        let entry = session.current_mut();
        let id = entry
            .break_id_at(index)
            .ok_or(AppError::InvalidBreak(index))?
            .to_string();

        entry.remove_break(&id);
        Ok(())
    }

    /// Replace the report, or append it on a new line.
    pub fn write_report<K: KvStore, C: Clock>(
        session: &mut EntrySession<K, C>,
        text: &str,
        append: bool,
    ) {
        let entry = session.current_mut();
        if append && !entry.report.is_empty() {
            let combined = format!("{}\n{}", entry.report, text);
            entry.set_report(&combined);
        } else {
            entry.set_report(text);
        }
    }
}
