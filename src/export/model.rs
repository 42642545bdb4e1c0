// src/export/model.rs

use crate::core::logic::Core;
use crate::models::{DaySummary, Entry};
use crate::utils::date::format_long_date;
use crate::utils::time::{format_duration, format_signed_duration, minutes_to_decimal_hours};
use serde::Serialize;

/// What a document renderer receives: one complete entry and the numbers
/// derived from it.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub entry: Entry,
    pub summary: DaySummary,
}

impl DailyReport {
    pub fn new(entry: Entry) -> Self {
        let summary = Core::build_daily_summary(&entry);
        Self { entry, summary }
    }

    pub fn long_date(&self) -> String {
        format_long_date(&self.entry.date)
    }
}

/// One line of a printable report, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Title(String),
    Heading(String),
    Field(String, String),
    Text(String),
    Blank,
}

const REPORT_WRAP_WIDTH: usize = 90;

/// Lay out a daily report: date, time entries, breaks, summary and the
/// free-text report.
pub fn report_lines(report: &DailyReport) -> Vec<ReportLine> {
    let e = &report.entry;
    let s = &report.summary;

    let mut lines = vec![
        ReportLine::Title("Daily Work Report".into()),
        ReportLine::Field("Date".into(), report.long_date()),
        ReportLine::Blank,
        ReportLine::Heading("Time Entries".into()),
        ReportLine::Field("Office In".into(), e.office_in.clone()),
        ReportLine::Field("Office Out".into(), e.office_out.clone()),
        ReportLine::Field("Lunch Start".into(), e.lunch_start.clone()),
        ReportLine::Field("Lunch End".into(), e.lunch_end.clone()),
        ReportLine::Field("Lunch Duration".into(), format_duration(s.lunch_minutes)),
        ReportLine::Blank,
        ReportLine::Heading("Breaks".into()),
    ];

    if e.breaks.is_empty() {
        lines.push(ReportLine::Text("No additional breaks recorded".into()));
    }
    for (i, b) in e.breaks.iter().enumerate() {
        lines.push(ReportLine::Field(
            format!("Break {}", i + 1),
            format!(
                "{} - {} ({})",
                b.start_time,
                b.end_time,
                format_duration(b.minutes())
            ),
        ));
    }

    lines.extend([
        ReportLine::Blank,
        ReportLine::Heading("Summary".into()),
        ReportLine::Field(
            "Total Office Hours".into(),
            format_duration(s.office_minutes),
        ),
        ReportLine::Field(
            "Total Break Time".into(),
            format_duration(s.total_break_minutes()),
        ),
        ReportLine::Field(
            "Total Desk Time".into(),
            format_signed_duration(s.desk_minutes),
        ),
        ReportLine::Blank,
        ReportLine::Heading("Daily Report".into()),
    ]);

    for paragraph in e.report.lines() {
        if paragraph.trim().is_empty() {
            lines.push(ReportLine::Blank);
            continue;
        }
        for wrapped in textwrap::wrap(paragraph, REPORT_WRAP_WIDTH) {
            lines.push(ReportLine::Text(wrapped.into_owned()));
        }
    }

    lines
}

/// Flat row for CSV / XLSX history exports.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub office_in: String,
    pub office_out: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub breaks: usize,
    pub office: String,
    pub lunch: String,
    pub other_breaks: String,
    pub desk: String,
    pub desk_hours: f64,
    pub report: String,
}

impl From<&DailyReport> for EntryExport {
    fn from(r: &DailyReport) -> Self {
        let e = &r.entry;
        let s = &r.summary;
        Self {
            date: e.date.clone(),
            office_in: e.office_in.clone(),
            office_out: e.office_out.clone(),
            lunch_start: e.lunch_start.clone(),
            lunch_end: e.lunch_end.clone(),
            breaks: e.breaks.len(),
            office: format_duration(s.office_minutes),
            lunch: format_duration(s.lunch_minutes),
            other_breaks: format_duration(s.breaks_minutes),
            desk: format_signed_duration(s.desk_minutes),
            desk_hours: minutes_to_decimal_hours(s.desk_minutes),
            report: e.report.clone(),
        }
    }
}

/// JSON history record: the entry exactly as persisted plus its summary.
#[derive(Serialize, Clone, Debug)]
pub struct EntryWithSummary {
    #[serde(flatten)]
    pub entry: Entry,
    pub summary: DaySummary,
}

impl From<&DailyReport> for EntryWithSummary {
    fn from(r: &DailyReport) -> Self {
        Self {
            entry: r.entry.clone(),
            summary: r.summary,
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "office_in",
        "office_out",
        "lunch_start",
        "lunch_end",
        "breaks",
        "office",
        "lunch",
        "other_breaks",
        "desk",
        "desk_hours",
        "report",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.office_in.clone(),
        e.office_out.clone(),
        e.lunch_start.clone(),
        e.lunch_end.clone(),
        e.breaks.to_string(),
        e.office.clone(),
        e.lunch.clone(),
        e.other_breaks.clone(),
        e.desk.clone(),
        format!("{:.2}", e.desk_hours),
        e.report.clone(),
    ]
}
