// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DailyReport, report_lines};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Render the daily report as PDF bytes.
pub fn render_pdf(report: &DailyReport) -> Vec<u8> {
    let footer = format!("Daily Work Report - {}", report.entry.date);
    let mut pdf = PdfManager::new();
    pdf.write_document(&footer, &report_lines(report));
    pdf.finish()
}

pub(crate) fn export_pdf(report: &DailyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    std::fs::write(path, render_pdf(report))
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
