// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DailyReport, EntryExport, EntryWithSummary};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON: each entry as persisted, plus its summary.
pub(crate) fn export_json(reports: &[DailyReport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let records: Vec<EntryWithSummary> = reports.iter().map(EntryWithSummary::from).collect();
    let json_data = serde_json::to_string_pretty(&records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with one flat row per entry (header comes from serde).
pub(crate) fn export_csv(reports: &[DailyReport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for r in reports {
        wtr.serialize(EntryExport::from(r))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
