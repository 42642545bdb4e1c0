use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::store::EntryStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut store = EntryStore::open_sqlite(&cfg.database)?;
        LogLogic::print_log(store.kv_mut().pool())?;
    }

    Ok(())
}
