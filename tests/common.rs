#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rdesktime::models::{BreakInterval, Entry};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdt() -> Command {
    cargo_bin_cmd!("rdesktime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdesktime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and record two working days through the CLI
pub fn init_db_with_data(db_path: &str) {
    rdt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for day in ["2025-09-01", "2025-09-15"] {
        rdt()
            .args([
                "--db",
                db_path,
                "set",
                day,
                "--in",
                "09:00",
                "--out",
                "17:30",
                "--lunch-start",
                "12:00",
                "--lunch-end",
                "12:45",
            ])
            .assert()
            .success();
    }
}

/// 09:00-17:30 with a 45 minute lunch and two breaks (15 + 10 minutes).
/// Desk time: 510 - 45 - 25 = 440 minutes.
pub fn sample_entry(date: &str) -> Entry {
    let mut e = Entry::new(date);
    e.office_in = "09:00".into();
    e.office_out = "17:30".into();
    e.lunch_start = "12:00".into();
    e.lunch_end = "12:45".into();
    e.breaks = vec![
        BreakInterval::with_times("10:00", "10:15"),
        BreakInterval::with_times("15:00", "15:10"),
    ];
    e.report = "Reviewed pull requests.\nPaired on the billing bug.".into();
    e
}
