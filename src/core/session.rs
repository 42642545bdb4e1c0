//! The day-entry workflow: pick a date, edit the in-memory entry, save.

use crate::core::logic::Core;
use crate::db::kv::KvStore;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySummary, Entry, TimeField};
use crate::utils::clock::Clock;
use crate::utils::{date, time};
use tracing::debug;

pub struct EntrySession<K: KvStore, C: Clock> {
    store: EntryStore<K>,
    clock: C,
    entries: Vec<Entry>,
    current: Entry,
}

impl<K: KvStore, C: Clock> EntrySession<K, C> {
    /// Loads every stored entry and selects today.
    pub fn open(store: EntryStore<K>, clock: C) -> Self {
        let today = date::today_str(&clock);
        Self::open_at(store, clock, &today)
    }

    /// Loads every stored entry and selects `date`.
    pub fn open_at(store: EntryStore<K>, clock: C, date: &str) -> Self {
        let entries = store.load_all();
        let current = Self::lookup_or_fresh(&entries, date);

        Self {
            store,
            clock,
            entries,
            current,
        }
    }

    fn lookup_or_fresh(entries: &[Entry], date: &str) -> Entry {
        entries
            .iter()
            .find(|e| e.date == date)
            .cloned()
            .unwrap_or_else(|| Entry::new(date))
    }

    pub fn current(&self) -> &Entry {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Entry {
        &mut self.current
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn store(&self) -> &EntryStore<K> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntryStore<K> {
        &mut self.store
    }

    /// True when the current date already has a stored entry.
    pub fn is_persisted(&self) -> bool {
        self.entries.iter().any(|e| e.date == self.current.date)
    }

    pub fn summary(&self) -> DaySummary {
        Core::build_daily_summary(&self.current)
    }

    /// Switch to `date`, loading its stored entry or starting a fresh one.
    /// Unsaved edits to the previous entry are dropped.
    pub fn select_date(&mut self, date: &str) -> AppResult<()> {
        if date::parse_date(date).is_none() {
            return Err(AppError::InvalidDate(date.to_string()));
        }
        debug!(date, "selecting date");
        self.current = match self.store.load_by_date(date) {
            Some(e) => e,
            None => Entry::new(date),
        };
        Ok(())
    }

    /// Adopt an entry picked from history.
    pub fn select_entry(&mut self, entry: Entry) {
        self.current = entry;
    }

    /// Discard unsaved edits: reload the stored entry for the current date,
    /// or start over with a fresh one.
    pub fn reset(&mut self) {
        let date = self.current.date.clone();
        self.current = self
            .store
            .load_by_date(&date)
            .unwrap_or_else(|| Entry::new(&date));
    }

    /// Set `field` to the clock's current minute and return the value.
    pub fn stamp_now(&mut self, field: TimeField) -> String {
        let now = time::current_time(&self.clock);
        self.current.set_time(field, &now);
        now
    }

    /// Persist the current entry and refresh the loaded collection.
    pub fn save(&mut self) -> AppResult<()> {
        if !self.current.is_valid() {
            return Err(AppError::InvalidTime(format!(
                "office in/out must be HH:MM (got '{}' / '{}')",
                self.current.office_in, self.current.office_out
            )));
        }

        self.store.save(&self.current)?;
        self.entries = self.store.load_all();
        Ok(())
    }
}
