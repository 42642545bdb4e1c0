// src/export/mod.rs

mod excel_date;
mod fs_utils;
pub mod html;
mod json_csv;
pub mod logic;
pub mod model;
mod pdf;
pub mod pdf_export;
mod range;
pub mod xlsx;

pub use logic::{ExportLogic, ExportRequest};
pub use model::{DailyReport, EntryExport, ReportLine};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Html,
    Json,
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Single-day printable report (as opposed to a history dump).
    pub fn is_document(&self) -> bool {
        matches!(self, ExportFormat::Pdf | ExportFormat::Html)
    }
}
