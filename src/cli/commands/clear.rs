use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !confirm("Delete ALL stored entries? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = EntryStore::open_sqlite(&cfg.database)?;
        let removed = DeleteLogic::clear(&mut store)?;
        success(format!("{removed} entries removed."));
    }

    Ok(())
}
