pub mod brk;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod set;
pub mod show;

use crate::config::Config;
use crate::core::session::EntrySession;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{saving, warning};
use crate::utils::clock::SystemClock;
use crate::utils::date;

pub(crate) type CliSession = EntrySession<SqliteKv, SystemClock>;

/// Validate an optional `YYYY-MM-DD` argument, defaulting to today.
pub(crate) fn resolve_day(arg: Option<&String>) -> AppResult<String> {
    date::resolve_date(arg.map(String::as_str), &SystemClock)
        .map(|d| date::format_date(&d))
        .ok_or_else(|| AppError::InvalidDate(arg.cloned().unwrap_or_default()))
}

/// Open the configured database and select `day`.
pub(crate) fn open_session(cfg: &Config, day: Option<&String>) -> AppResult<CliSession> {
    let day = resolve_day(day)?;
    let store = EntryStore::open_sqlite(&cfg.database)?;
    Ok(EntrySession::open_at(store, SystemClock, &day))
}

/// Write the session's current entry, with the optional cosmetic pause.
pub(crate) fn save_session(session: &mut CliSession, cfg: &Config) -> AppResult<()> {
    saving(cfg.save_delay_ms);
    session.save()
}

/// Internal audit line; a failure here never aborts the command.
pub(crate) fn audit(store: &mut EntryStore<SqliteKv>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.kv_mut().pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
