// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{PunchExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[PunchExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with a header line, even when there are no rows.
pub(crate) fn export_csv(rows: &[PunchExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    // serialize() only writes the header along with the first row
    if rows.is_empty() {
        wtr.write_record(["work_type", "punch_in", "punch_out", "hours", "amount"])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
