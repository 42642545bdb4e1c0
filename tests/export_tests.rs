mod common;
use common::{sample_entry, temp_out};
use rdesktime::db::EntryStore;
use rdesktime::errors::AppError;
use rdesktime::export::html::{escape_html, render_html};
use rdesktime::export::model::report_lines;
use rdesktime::export::pdf_export::render_pdf;
use rdesktime::export::xlsx::{MAX_CELL_CHARS, excel_cell_text};
use rdesktime::export::{DailyReport, ExportFormat, ExportLogic, ExportRequest, ReportLine};
use rdesktime::models::Entry;
use std::fs;

fn request(format: ExportFormat, file: &str) -> ExportRequest {
    ExportRequest {
        format,
        file: file.to_string(),
        date: "2025-09-01".into(),
        range: None,
        force: true,
    }
}

fn store_with_two_days() -> EntryStore<rdesktime::db::MemoryKv> {
    let mut store = EntryStore::in_memory();
    store.save(&sample_entry("2025-09-15")).unwrap();
    store.save(&sample_entry("2025-08-31")).unwrap();
    store
}

#[test]
fn test_report_lines_layout() {
    let lines = report_lines(&DailyReport::new(sample_entry("2025-09-01")));

    assert_eq!(lines[0], ReportLine::Title("Daily Work Report".into()));
    assert!(lines.contains(&ReportLine::Field(
        "Date".into(),
        "Monday, September 1, 2025".into()
    )));
    assert!(lines.contains(&ReportLine::Field(
        "Break 2".into(),
        "15:00 - 15:10 (0h 10m)".into()
    )));
    assert!(lines.contains(&ReportLine::Field(
        "Total Break Time".into(),
        "1h 10m".into()
    )));
    assert!(lines.contains(&ReportLine::Field(
        "Total Desk Time".into(),
        "7h 20m".into()
    )));
    assert!(lines.contains(&ReportLine::Text("Paired on the billing bug.".into())));
}

#[test]
fn test_report_lines_without_breaks() {
    let lines = report_lines(&DailyReport::new(Entry::new("2025-09-01")));
    assert!(lines.contains(&ReportLine::Text("No additional breaks recorded".into())));
}

#[test]
fn test_long_report_lines_are_wrapped() {
    let mut e = sample_entry("2025-09-01");
    e.report = "word ".repeat(60);

    let lines = report_lines(&DailyReport::new(e));
    let texts: Vec<&String> = lines
        .iter()
        .filter_map(|l| match l {
            ReportLine::Text(t) => Some(t),
            _ => None,
        })
        .collect();

    assert!(texts.len() > 1);
    assert!(texts.iter().all(|t| t.chars().count() <= 90));
}

#[test]
fn test_html_is_printable_and_escaped() {
    let mut e = sample_entry("2025-09-01");
    e.report = "<script>alert(1)</script>\nsecond line".into();

    let html = render_html(&DailyReport::new(e));

    assert!(html.contains("onload=\"window.print()\""));
    assert!(html.contains("Monday, September 1, 2025"));
    assert!(html.contains("7h 20m"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("<br>second line"));
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"a & b < "c" > 'd'"#),
        "a &amp; b &lt; &quot;c&quot; &gt; &#39;d&#39;"
    );
}

#[test]
fn test_pdf_bytes() {
    let bytes = render_pdf(&DailyReport::new(sample_entry("2025-09-01")));
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn test_pdf_fonts_use_winansi_for_accents() {
    let mut entry = sample_entry("2025-09-01");
    entry.report = "Café".into();

    let bytes = render_pdf(&DailyReport::new(entry));
    let text = String::from_utf8_lossy(&bytes);

    assert_eq!(text.matches("/WinAnsiEncoding").count(), 2);
    // "Café" as WinAnsi bytes
    assert!(text.contains("436166E9"));
}

#[test]
fn test_export_html_document() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_html", "html");

    let mut req = request(ExportFormat::Html, &out);
    req.date = "2025-09-15".into();

    let written = ExportLogic::export(&store, &req).unwrap();
    assert!(written.is_some());

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Monday, September 15, 2025"));
}

#[test]
fn test_export_document_requires_an_entry() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_missing", "pdf");

    let res = ExportLogic::export(&store, &request(ExportFormat::Pdf, &out));
    assert!(matches!(res, Err(AppError::NoEntryForDate(_))));
}

#[test]
fn test_export_requires_absolute_path() {
    let store = store_with_two_days();
    let res = ExportLogic::export(&store, &request(ExportFormat::Json, "relative.json"));
    assert!(matches!(res, Err(AppError::Export(_))));
}

#[test]
fn test_export_json_history_oldest_first() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_json", "json");

    ExportLogic::export(&store, &request(ExportFormat::Json, &out)).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let arr = parsed.as_array().unwrap();

    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["date"], "2025-08-31");
    assert_eq!(arr[1]["officeIn"], "09:00");
    assert_eq!(arr[1]["summary"]["deskMinutes"], 440);
}

#[test]
fn test_export_csv_range() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_csv_range", "csv");

    let mut req = request(ExportFormat::Csv, &out);
    req.range = Some("2025-09".into());
    ExportLogic::export(&store, &req).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("date,office_in,office_out"));
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-08-31"));
    assert!(content.contains("7.33"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_empty", "csv");

    let mut req = request(ExportFormat::Csv, &out);
    req.range = Some("2020".into());

    assert!(ExportLogic::export(&store, &req).unwrap().is_none());
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_invalid_range() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_bad_range", "json");

    let mut req = request(ExportFormat::Json, &out);
    req.range = Some("2025-09:2025".into());

    assert!(matches!(
        ExportLogic::export(&store, &req),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_export_xlsx() {
    let store = store_with_two_days();
    let out = temp_out("lib_export_xlsx", "xlsx");

    ExportLogic::export(&store, &request(ExportFormat::Xlsx, &out)).unwrap();

    let bytes = fs::read(&out).unwrap();
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_excel_cell_text_is_clipped() {
    assert_eq!(excel_cell_text("2025-09-01"), "2025-09-01");

    let long = "é".repeat(MAX_CELL_CHARS + 10);
    let clipped = excel_cell_text(&long);
    assert_eq!(clipped.chars().count(), MAX_CELL_CHARS);
    assert!(long.starts_with(clipped));
}

#[test]
fn test_export_xlsx_with_oversized_and_numeric_reports() {
    let mut store = EntryStore::in_memory();
    let mut long = sample_entry("2025-09-01");
    long.report = "x".repeat(MAX_CELL_CHARS + 1_000);
    store.save(&long).unwrap();
    let mut dated = sample_entry("2025-09-02");
    dated.report = "2025-09-01".into();
    store.save(&dated).unwrap();
    let mut nan = sample_entry("2025-09-03");
    nan.report = "NaN".into();
    store.save(&nan).unwrap();

    let out = temp_out("lib_export_xlsx_reports", "xlsx");
    ExportLogic::export(&store, &request(ExportFormat::Xlsx, &out)).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
