use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{HistoryLogic, HistoryPage};
use crate::core::logic::Core;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::format_long_date;
use crate::utils::formatting::display_time;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, page } = cmd {
        let store = EntryStore::open_sqlite(&cfg.database)?;
        let entries = store.load_all();

        let result = HistoryLogic::page(
            &entries,
            filter.as_deref(),
            *page,
            cfg.history_page_size,
        );

        if result.rows.is_empty() {
            match filter {
                Some(f) if !f.trim().is_empty() => info(format!("No entries match '{f}'.")),
                _ => info("No entries saved yet."),
            }
            return Ok(());
        }

        print_page(&result, cfg);
    }

    Ok(())
}

fn print_page(page: &HistoryPage, cfg: &Config) {
    let twelve = cfg.twelve_hour();

    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("DAY", 9),
        Column::new("IN", 5),
        Column::new("OUT", 5),
        Column::new("LUNCH", 7),
        Column::new("BREAKS", 7),
        Column::new("DESK", 8),
        Column::new("REPORT", 6),
    ]);

    for row in &page.rows {
        let e = &row.entry;
        let text = Core::summary_text(e, &row.summary);

        let weekday = format_long_date(&e.date)
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string();

        let report = if e.report.is_empty() {
            "--".to_string()
        } else {
            format!("{}w", e.report_stats().1)
        };

        table.add_row(vec![
            e.date.clone(),
            weekday,
            display_time(&e.office_in, twelve),
            display_time(&e.office_out, twelve),
            text.lunch,
            text.breaks,
            text.desk,
            report,
        ]);
    }

    println!("📅 Saved entries\n");
    print!("{}", table.render(&cfg.separator_char));

    let mut footer = format!(
        "Page {} of {} ({} entries)",
        page.page, page.total_pages, page.total_entries
    );
    if page.has_previous() {
        footer.push_str(&format!("  previous: --page {}", page.page - 1));
    }
    if page.has_next() {
        footer.push_str(&format!("  next: --page {}", page.page + 1));
    }
    println!("\n{}{}{}", GREY, footer, RESET);
}
