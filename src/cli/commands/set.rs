use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::TimeField;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::display_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        office_in,
        office_out,
        lunch_start,
        lunch_end,
        now,
    } = cmd
    {
        let updates: Vec<(TimeField, &str)> = [
            (TimeField::OfficeIn, office_in),
            (TimeField::OfficeOut, office_out),
            (TimeField::LunchStart, lunch_start),
            (TimeField::LunchEnd, lunch_end),
        ]
        .into_iter()
        .filter_map(|(f, v)| v.as_deref().map(|v| (f, v)))
        .collect();

        if updates.is_empty() && now.is_none() {
            warning("Nothing to set: pass --in, --out, --lunch-start, --lunch-end or --now.");
            return Ok(());
        }

        let mut session = super::open_session(cfg, date.as_ref())?;
        let changed = EditLogic::apply_times(&mut session, &updates, *now)?;
        super::save_session(&mut session, cfg)?;

        let day = session.current().date.clone();
        let described: Vec<String> = changed
            .iter()
            .map(|(f, v)| format!("{}={}", f.key(), if v.is_empty() { "-" } else { v.as_str() }))
            .collect();
        super::audit(session.store_mut(), "set", &day, &described.join(", "));

        for (f, v) in &changed {
            success(format!(
                "{} for {} set to {}",
                f.label(),
                day,
                display_time(v, cfg.twelve_hour())
            ));
        }

        let summary = session.summary();
        super::show::print_entry(session.current(), &summary, cfg);
    }

    Ok(())
}
