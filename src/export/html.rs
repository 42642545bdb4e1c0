// src/export/html.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::DailyReport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::time::{format_duration, format_signed_duration};
use std::fmt::Write as _;
use std::path::Path;

const STYLE: &str = r#"
      body { font-family: Arial, sans-serif; margin: 30px; }
      h1 { color: #3B82F6; margin-bottom: 20px; }
      h2 { color: #1F2937; margin-top: 20px; }
      .time-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; margin-bottom: 20px; }
      .time-item { margin-bottom: 10px; }
      .time-label { font-weight: bold; color: #4B5563; }
      .time-value { color: #1F2937; }
      .break-item { margin-left: 20px; margin-bottom: 5px; }
      .summary { background-color: #F3F4F6; padding: 15px; border-radius: 5px; margin-top: 20px; }
      .report-content { line-height: 1.5; }
"#;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn item(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        "\n        <div class=\"time-item\"><span class=\"time-label\">{}:</span> <span class=\"time-value\">{}</span></div>",
        label,
        escape_html(value)
    );
}

/// Printable HTML page. Opening it triggers the browser's print dialog.
pub fn render_html(report: &DailyReport) -> String {
    let e = &report.entry;
    let s = &report.summary;

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Daily Work Report - {}</title>\n    <style>{}</style>\n  </head>\n  <body onload=\"window.print()\">\n    <h1>Daily Work Report</h1>",
        escape_html(&e.date),
        STYLE
    );

    item(&mut out, "Date", &report.long_date());

    out.push_str("\n    <h2>Time Entries</h2>\n    <div class=\"time-grid\">");
    item(&mut out, "Office In", &e.office_in);
    item(&mut out, "Office Out", &e.office_out);
    item(&mut out, "Lunch Start", &e.lunch_start);
    item(&mut out, "Lunch End", &e.lunch_end);
    item(&mut out, "Lunch Duration", &format_duration(s.lunch_minutes));
    out.push_str("\n    </div>");

    out.push_str("\n    <h2>Breaks</h2>");
    for (i, b) in e.breaks.iter().enumerate() {
        let _ = write!(
            out,
            "\n    <div class=\"break-item\"><span class=\"time-label\">Break {}:</span> <span class=\"time-value\">{} - {} ({})</span></div>",
            i + 1,
            escape_html(&b.start_time),
            escape_html(&b.end_time),
            format_duration(b.minutes())
        );
    }

    out.push_str("\n    <div class=\"summary\">");
    item(&mut out, "Total Office Hours", &format_duration(s.office_minutes));
    item(
        &mut out,
        "Total Break Time",
        &format_duration(s.total_break_minutes()),
    );
    item(
        &mut out,
        "Total Desk Time",
        &format_signed_duration(s.desk_minutes),
    );
    out.push_str("\n    </div>");

    let _ = write!(
        out,
        "\n    <h2>Daily Report</h2>\n    <div class=\"report-content\">{}</div>\n  </body>\n</html>\n",
        escape_html(&e.report).replace('\n', "<br>")
    );

    out
}

pub(crate) fn export_html(report: &DailyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    std::fs::write(path, render_html(report))
        .map_err(|e| AppError::Export(format!("HTML export error: {e}")))?;

    notify_export_success("HTML", path);
    Ok(())
}
