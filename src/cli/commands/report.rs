use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        date,
        text,
        file,
        append,
    } = cmd
    {
        let body = match (text, file) {
            (Some(t), _) => t.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                warning("Nothing to write: pass --text or --file.");
                return Ok(());
            }
        };

        let mut session = super::open_session(cfg, date.as_ref())?;
        EditLogic::write_report(&mut session, body.trim_end(), *append);
        super::save_session(&mut session, cfg)?;

        let day = session.current().date.clone();
        let (chars, words) = session.current().report_stats();
        let verb = if *append { "Appended to" } else { "Wrote" };

        super::audit(
            session.store_mut(),
            "report",
            &day,
            &format!("{verb} report ({chars} chars, {words} words)"),
        );
        success(format!(
            "{verb} report for {day}: {chars} characters, {words} words"
        ));
    }

    Ok(())
}
