use crate::db::kv::SqliteKv;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use std::fs;

pub fn print_db_info(store: &mut EntryStore<SqliteKv>, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ENTRIES
    //
    let entries = store.load_all();
    let breaks: usize = entries.iter().map(|e| e.breaks.len()).sum();
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );
    println!("{}• Total breaks:{} {}", CYAN, RESET, breaks);

    //
    // 3) DATE RANGE
    //
    let mut dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
    dates.sort_unstable();

    let first_date = dates.first().copied();
    let last_date = dates.last().copied();

    let fmt_first = first_date
        .map(str::to_string)
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .map(str::to_string)
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) LOG ROWS
    //
    let log_rows: i64 =
        store
            .kv_mut()
            .pool()
            .conn
            .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    //
    // 5) COVERAGE (recorded days over the calendar span)
    //
    if let (Some(f), Some(l)) = (first_date.and_then(parse_date), last_date.and_then(parse_date))
    {
        let days = (l - f).num_days() + 1;
        let pct = entries.len() as f64 / days as f64 * 100.0;
        println!("{}• Coverage:{} {:.0}% of {} days", CYAN, RESET, pct, days);
    }

    println!();
    Ok(())
}
