use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the entry for `date`. Errors when there is none.
    pub fn apply(store: &mut EntryStore<SqliteKv>, date: &str) -> AppResult<()> {
        if !store.delete(date)? {
            return Err(AppError::NoEntryForDate(date.to_string()));
        }

        if let Err(e) = ttlog(
            &store.kv_mut().pool().conn,
            "del",
            date,
            &format!("Deleted entry for {date}"),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(())
    }

    /// Remove every stored entry.
    pub fn clear(store: &mut EntryStore<SqliteKv>) -> AppResult<usize> {
        let count = store.load_all().len();
        store.clear()?;

        if let Err(e) = ttlog(
            &store.kv_mut().pool().conn,
            "clear",
            "",
            &format!("Cleared {count} entries"),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(count)
    }
}
