use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rdt, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rdt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_set_and_show_day() {
    let db_path = setup_test_db("cli_set_show");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Monday, September 1, 2025"))
        .stdout(contains("09:00"))
        .stdout(contains("7h 45m"));
}

#[test]
fn test_show_unsaved_day() {
    let db_path = setup_test_db("cli_show_unsaved");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "show", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("No saved entry for 2025-09-02"))
        .stdout(contains("--:--"));
}

#[test]
fn test_set_accepts_twelve_hour_input() {
    let db_path = setup_test_db("cli_set_12h");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "set", "2025-09-01", "--out", "6:00 pm"])
        .assert()
        .success()
        .stdout(contains("18:00"))
        .stdout(contains("8h 15m"));
}

#[test]
fn test_set_rejects_invalid_time() {
    let db_path = setup_test_db("cli_set_invalid");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "set", "2025-09-01", "--in", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_set_rejects_invalid_date() {
    let db_path = setup_test_db("cli_set_bad_date");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "set", "01/09/2025", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_breaks_reduce_desk_time() {
    let db_path = setup_test_db("cli_breaks");
    init_db_with_data(&db_path);

    rdt()
        .args([
            "--db",
            &db_path,
            "break",
            "add",
            "2025-09-01",
            "--start",
            "10:00",
            "--end",
            "10:15",
        ])
        .assert()
        .success()
        .stdout(contains("Break #1 added"))
        .stdout(contains("7h 30m"));

    rdt()
        .args([
            "--db",
            &db_path,
            "break",
            "edit",
            "2025-09-01",
            "--index",
            "1",
            "--end",
            "10:30",
        ])
        .assert()
        .success()
        .stdout(contains("7h 15m"));

    rdt()
        .args(["--db", &db_path, "break", "del", "2025-09-01", "--index", "3"])
        .assert()
        .failure()
        .stderr(contains("Invalid break index: 3"));

    rdt()
        .args(["--db", &db_path, "break", "del", "2025-09-01", "--index", "1"])
        .assert()
        .success()
        .stdout(contains("7h 45m"));
}

#[test]
fn test_report_text_and_append() {
    let db_path = setup_test_db("cli_report");
    init_db_with_data(&db_path);

    rdt()
        .args([
            "--db",
            &db_path,
            "report",
            "2025-09-01",
            "--text",
            "Sprint planning",
        ])
        .assert()
        .success()
        .stdout(contains("15 characters, 2 words"));

    rdt()
        .args([
            "--db",
            &db_path,
            "report",
            "2025-09-01",
            "--text",
            "Fixed CI",
            "--append",
        ])
        .assert()
        .success();

    rdt()
        .args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Sprint planning"))
        .stdout(contains("Fixed CI"));
}

#[test]
fn test_list_newest_first_with_filter() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "set", "2025-08-29", "--in", "08:00"])
        .assert()
        .success();

    let output = rdt()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let first = stdout.find("2025-09-15").expect("newest row");
    let last = stdout.find("2025-08-29").expect("oldest row");
    assert!(first < last);
    assert!(stdout.contains("Page 1 of 1 (3 entries)"));

    rdt()
        .args(["--db", &db_path, "list", "--filter", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").and(contains("2025-08-29").not()));

    rdt()
        .args(["--db", &db_path, "list", "--filter", "2024"])
        .assert()
        .success()
        .stdout(contains("No entries match"));
}

#[test]
fn test_del_and_clear() {
    let db_path = setup_test_db("cli_del_clear");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rdt()
        .args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found for date 2025-09-01"));

    rdt()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 entries removed"));

    rdt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries saved yet"));
}

#[test]
fn test_export_html_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);

    let html = temp_out("cli_export", "html");
    rdt()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "html",
            "--date",
            "2025-09-15",
            "--file",
            &html,
            "--force",
        ])
        .assert()
        .success();
    let content = fs::read_to_string(&html).expect("read exported html");
    assert!(content.contains("Monday, September 15, 2025"));

    let csv = temp_out("cli_export", "csv");
    rdt()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv, "--range", "2025-09",
        ])
        .assert()
        .success();
    let content = fs::read_to_string(&csv).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
}

#[test]
fn test_export_pdf_for_missing_day_fails() {
    let db_path = setup_test_db("cli_export_missing");
    init_db_with_data(&db_path);

    let pdf = temp_out("cli_export_missing", "pdf");
    rdt()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "pdf",
            "--date",
            "2025-09-02",
            "--file",
            &pdf,
        ])
        .assert()
        .failure()
        .stderr(contains("No entry found for date 2025-09-02"));
}

#[test]
fn test_log_and_db_check() {
    let db_path = setup_test_db("cli_log_check");
    init_db_with_data(&db_path);

    rdt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("2025-09-15"));

    rdt()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("integrity check passed"))
        .stdout(contains("Stored entries readable:"))
        .stdout(contains("Total entries:"));

    rdt()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("up to date"));
}
