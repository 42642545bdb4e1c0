use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        range,
        force,
    } = cmd
    {
        if format.is_document() && range.is_some() {
            warning("--range only applies to json, csv and xlsx; ignoring it.");
        }

        let req = ExportRequest {
            format: *format,
            file: file.clone(),
            date: super::resolve_day(date.as_ref())?,
            range: range.clone(),
            force: *force,
        };

        let mut store = EntryStore::open_sqlite(&cfg.database)?;

        if let Some(path) = ExportLogic::export(&store, &req)? {
            let target = if format.is_document() {
                req.date.clone()
            } else {
                req.range.clone().unwrap_or_else(|| "all".into())
            };
            super::audit(
                &mut store,
                "export",
                &target,
                &format!("{} export to {}", format.as_str(), path.display()),
            );
        }
    }
    Ok(())
}
