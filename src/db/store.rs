//! Date-keyed entry persistence.
//!
//! The whole collection lives as one JSON array under [`STORAGE_KEY`]. Every
//! write loads the collection, mutates it and writes it back in full. A crash
//! mid-write can lose the last update; concurrent writers from separate
//! processes can overwrite each other.

use crate::db::kv::{KvStore, MemoryKv, SqliteKv};
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use tracing::{debug, warn};

pub const STORAGE_KEY: &str = "office-time-entries";

pub struct EntryStore<K: KvStore> {
    kv: K,
}

impl EntryStore<SqliteKv> {
    pub fn open_sqlite(path: &str) -> AppResult<Self> {
        Ok(Self::new(SqliteKv::open(path)?))
    }
}

impl EntryStore<MemoryKv> {
    pub fn in_memory() -> Self {
        Self::new(MemoryKv::new())
    }
}

impl<K: KvStore> EntryStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut K {
        &mut self.kv
    }

    /// Insert or replace the entry for `entry.date`. An existing entry keeps
    /// its position in the collection. Refuses to overwrite a corrupt blob.
    pub fn save(&mut self, entry: &Entry) -> AppResult<()> {
        let mut entries = self.try_load_all()?;

        match entries.iter().position(|e| e.date == entry.date) {
            Some(idx) => {
                debug!(date = %entry.date, "replacing stored entry");
                entries[idx] = entry.clone();
            }
            None => {
                debug!(date = %entry.date, "appending new entry");
                entries.push(entry.clone());
            }
        }

        self.write_all(&entries)
    }

    /// Every stored entry, in storage order. A missing or corrupt blob reads
    /// as an empty collection.
    pub fn load_all(&self) -> Vec<Entry> {
        match self.try_load_all() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "stored entries unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Like [`load_all`](Self::load_all) but reports a corrupt blob instead
    /// of hiding it.
    pub fn try_load_all(&self) -> AppResult<Vec<Entry>> {
        match self.kv.get(STORAGE_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::CorruptStore(e.to_string())),
        }
    }

    pub fn load_by_date(&self, date: &str) -> Option<Entry> {
        self.load_all().into_iter().find(|e| e.date == date)
    }

    /// Remove the entry for `date`. Returns whether one was removed.
    pub fn delete(&mut self, date: &str) -> AppResult<bool> {
        let mut entries = self.try_load_all()?;
        let before = entries.len();
        entries.retain(|e| e.date != date);

        if entries.len() == before {
            return Ok(false);
        }

        self.write_all(&entries)?;
        Ok(true)
    }

    /// Drop the stored collection entirely.
    pub fn clear(&mut self) -> AppResult<()> {
        self.kv.remove(STORAGE_KEY)
    }

    fn write_all(&mut self, entries: &[Entry]) -> AppResult<()> {
        let json = serde_json::to_string(entries)?;
        self.kv.set(STORAGE_KEY, &json)
    }
}
