use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::{DaySummary, Entry, TimeField};
use crate::ui::messages::{field, header, info};
use crate::utils::colors::{RESET, color_for_desk, colorize_in_out, colorize_optional};
use crate::utils::date::format_long_date;
use crate::utils::formatting::{display_time, separator};
use crate::utils::time::format_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let session = super::open_session(cfg, date.as_ref())?;

        if !session.is_persisted() {
            info(format!("No saved entry for {} yet.", session.current().date));
        }

        print_entry(session.current(), &session.summary(), cfg);
    }

    Ok(())
}

/// Full day view: times, breaks, summary and report.
pub(crate) fn print_entry(entry: &Entry, summary: &DaySummary, cfg: &Config) {
    let twelve = cfg.twelve_hour();

    header(format_long_date(&entry.date));

    for f in TimeField::ALL {
        let shown = display_time(entry.time(f), twelve);
        let value = match f {
            TimeField::OfficeIn => colorize_in_out(&shown, true),
            TimeField::OfficeOut => colorize_in_out(&shown, false),
            _ => colorize_optional(&shown),
        };
        field(f.label(), value);
    }

    println!("\n  Breaks");
    if entry.breaks.is_empty() {
        println!("  {}", colorize_optional("--"));
    }
    for (i, b) in entry.breaks.iter().enumerate() {
        println!(
            "  #{:<3} {} → {}  ({})",
            i + 1,
            colorize_optional(&display_time(&b.start_time, twelve)),
            colorize_optional(&display_time(&b.end_time, twelve)),
            format_duration(b.minutes())
        );
    }

    let text = Core::summary_text(entry, summary);

    println!("\n  {}", separator(&cfg.separator_char, 34));
    field("Office", colorize_optional(&text.office));
    field("Lunch", colorize_optional(&text.lunch));
    field("Breaks", colorize_optional(&text.breaks));
    field(
        "Desk time",
        format!(
            "{}{}{}",
            color_for_desk(summary.desk_minutes),
            text.desk,
            RESET
        ),
    );

    if !entry.report.is_empty() {
        let (chars, words) = entry.report_stats();
        println!("\n  Report ({chars} chars, {words} words)");
        for line in entry.report.lines() {
            println!("    {line}");
        }
    }
    println!();
}
