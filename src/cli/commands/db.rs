use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        //
        // 1) MIGRATE (before anything opens the store, which migrates silently)
        //
        if *migrate {
            let pool = DbPool::new(&cfg.database)?;
            let pending = pending_migrations(&pool.conn)?;

            println!("{}▶ Running migrations…{}", CYAN, RESET);
            if pending.is_empty() {
                println!("{}✔ Schema is up to date.{}\n", GREEN, RESET);
            } else {
                for id in run_pending_migrations(&pool.conn)? {
                    println!("  • {id}");
                }
                println!("{}✔ Migration completed.{}\n", GREEN, RESET);
            }
        }

        if !(*info || *check || *vacuum) {
            return Ok(());
        }

        let mut store = EntryStore::open_sqlite(&cfg.database)?;

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut store, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            run_check(&mut store)?;
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.kv_mut().pool().conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}

fn run_check(store: &mut EntryStore<SqliteKv>) -> AppResult<()> {
    println!("{}▶ Running integrity check…{}", CYAN, RESET);

    let integrity: String =
        store
            .kv_mut()
            .pool()
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        println!("{}✔ SQLite integrity check passed.{}", GREEN, RESET);
    } else {
        println!("{}✘ SQLite integrity check failed:{} {}", RED, RESET, integrity);
    }

    match store.try_load_all() {
        Ok(entries) => {
            let invalid: Vec<&str> = entries
                .iter()
                .filter(|e| !e.is_valid())
                .map(|e| e.date.as_str())
                .collect();

            println!(
                "{}✔ Stored entries readable:{} {}",
                GREEN,
                RESET,
                entries.len()
            );
            if !invalid.is_empty() {
                println!(
                    "{}⚠ Entries with malformed office times:{} {}",
                    YELLOW,
                    RESET,
                    invalid.join(", ")
                );
            }
        }
        Err(e) => println!("{}✘ {}{}", RED, e, RESET),
    }

    println!();
    Ok(())
}
