use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_str, yes } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let prompt = format!("Delete the entry for {}? This action is irreversible.", d);
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = EntryStore::open_sqlite(&cfg.database)?;
        DeleteLogic::apply(&mut store, &date::format_date(&d))?;
        success(format!("Entry for {} has been deleted.", d));
    }

    Ok(())
}
