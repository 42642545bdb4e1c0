// src/export/logic.rs

use crate::db::kv::KvStore;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DailyReport;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::Entry;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

type DocumentWriter = fn(&DailyReport, &Path) -> AppResult<()>;
type HistoryWriter = fn(&[DailyReport], &Path) -> AppResult<()>;

/// Where an export writes and what it covers.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub file: String,
    /// Day for PDF/HTML reports (`YYYY-MM-DD`).
    pub date: String,
    /// `None`, `"all"` or a range expression for JSON/CSV/XLSX.
    pub range: Option<String>,
    pub force: bool,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Runs the export and returns the path written, or `None` when there was
    /// nothing to export.
    pub fn export<K: KvStore>(
        store: &EntryStore<K>,
        req: &ExportRequest,
    ) -> AppResult<Option<PathBuf>> {
        let path = expand_tilde(&req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        match req.format {
            ExportFormat::Pdf => Self::document(store, req, path, export_pdf),
            ExportFormat::Html => Self::document(store, req, path, export_html),
            ExportFormat::Json => Self::history(store, req, path, export_json),
            ExportFormat::Csv => Self::history(store, req, path, export_csv),
            ExportFormat::Xlsx => Self::history(store, req, path, export_xlsx),
        }
    }

    /// Single-day printable report.
    fn document<K: KvStore>(
        store: &EntryStore<K>,
        req: &ExportRequest,
        path: PathBuf,
        render: DocumentWriter,
    ) -> AppResult<Option<PathBuf>> {
        let entry = store
            .load_by_date(&req.date)
            .ok_or_else(|| AppError::NoEntryForDate(req.date.clone()))?;

        if !entry.is_valid() {
            return Err(AppError::InvalidTime(format!(
                "entry for {} has malformed office times",
                entry.date
            )));
        }

        ensure_writable(&path, req.force)?;
        render(&DailyReport::new(entry), &path)?;
        Ok(Some(path))
    }

    /// Every entry in the requested range.
    fn history<K: KvStore>(
        store: &EntryStore<K>,
        req: &ExportRequest,
        path: PathBuf,
        write: HistoryWriter,
    ) -> AppResult<Option<PathBuf>> {
        let bounds: Option<(NaiveDate, NaiveDate)> = match &req.range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let reports: Vec<DailyReport> = select_entries(store.load_all(), bounds)
            .into_iter()
            .map(DailyReport::new)
            .collect();

        if reports.is_empty() {
            warning("No entries found for selected range.");
            return Ok(None);
        }

        ensure_writable(&path, req.force)?;
        write(&reports, &path)?;
        Ok(Some(path))
    }
}

/// Entries inside `bounds` (inclusive), oldest first.
pub fn select_entries(entries: Vec<Entry>, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<Entry> {
    let mut out: Vec<Entry> = entries
        .into_iter()
        .filter(|e| match (bounds, parse_date(&e.date)) {
            (None, _) => true,
            (Some((start, end)), Some(d)) => d >= start && d <= end,
            (Some(_), None) => false,
        })
        .collect();

    out.sort_by(|a, b| a.date.cmp(&b.date));
    out
}
