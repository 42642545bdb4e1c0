//! Schema creation and versioned migrations.
//!
//! Applied migrations are recorded in the `log` table with operation
//! `migration_applied` and the migration id as target.

use rusqlite::{Connection, OptionalExtension, Result, params};
use tracing::{debug, info};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered list of (id, description, migration).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20260101_0001_create_kv_store",
        "Created kv_store table",
        create_kv_table,
    ),
    (
        "20260101_0002_index_log_operation",
        "Indexed log.operation",
        index_log_operation,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Key-value table backing the entry store. One row per storage key.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )
}

fn index_log_operation(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")
}

fn is_applied(conn: &Connection, id: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([id], |_| Ok(())).optional()?.is_some())
}

/// Ids of migrations not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for (id, _, _) in MIGRATIONS {
        if !is_applied(conn, id)? {
            out.push(*id);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations. Returns the ids that were
/// applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for (id, description, migration) in MIGRATIONS {
        if is_applied(conn, id)? {
            debug!(migration = id, "already applied");
            continue;
        }

        migration(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![chrono::Local::now().to_rfc3339(), id, description],
        )?;

        info!(migration = id, "migration applied");
        applied.push(*id);
    }

    Ok(applied)
}
