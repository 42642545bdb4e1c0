use crate::cli::parser::{BreakAction, Commands};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break { action } = cmd {
        let (mut session, message) = match action {
            BreakAction::Add { date, start, end } => {
                let mut session = super::open_session(cfg, date.as_ref())?;
                EditLogic::add_break(&mut session, start.as_deref(), end.as_deref())?;
                let n = session.current().breaks.len();
                (session, format!("Break #{n} added"))
            }
            BreakAction::Edit {
                date,
                index,
                start,
                end,
            } => {
                let mut session = super::open_session(cfg, date.as_ref())?;
                EditLogic::edit_break(&mut session, *index, start.as_deref(), end.as_deref())?;
                (session, format!("Break #{index} updated"))
            }
            BreakAction::Del { date, index } => {
                let mut session = super::open_session(cfg, date.as_ref())?;
                EditLogic::remove_break(&mut session, *index)?;
                (session, format!("Break #{index} removed"))
            }
        };

        super::save_session(&mut session, cfg)?;

        let day = session.current().date.clone();
        super::audit(session.store_mut(), "break", &day, &message);
        success(format!("{message} for {day}"));

        let summary = session.summary();
        super::show::print_entry(session.current(), &summary, cfg);
    }

    Ok(())
}
