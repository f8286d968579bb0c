use crate::errors::AppResult;
use crate::export::{ExportFormat, PunchExport, ensure_writable, export_csv, export_json};
use crate::store::Storage;
use crate::store::log::ttlog_or_warn;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::fs;

pub struct ExportLogic;

impl ExportLogic {
    /// Export punch records with their computed hours and amounts.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (`~/` is expanded)
    /// - `closed_only`: skip the open punch, if any
    /// - `force`: overwrite without asking
    ///
    /// Returns the number of exported rows, or `None` if the user declined
    /// to overwrite an existing file.
    pub fn export(
        storage: &Storage,
        format: ExportFormat,
        file: &str,
        closed_only: bool,
        force: bool,
    ) -> AppResult<Option<usize>> {
        let path = expand_tilde(file);

        if !ensure_writable(&path, force)? {
            info("Export cancelled: existing file not overwritten.");
            return Ok(None);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let punches = storage.punches.load_all()?;
        let work_types = storage.work_types.load_all()?;

        let rows: Vec<PunchExport> = punches
            .iter()
            .filter(|p| !closed_only || !p.is_open())
            .map(|p| PunchExport::from_record(p, &work_types))
            .collect();

        if rows.is_empty() {
            info("No punch records to export.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_or_warn(
            storage,
            "export",
            format.as_str(),
            &format!("Exported {} punches to {}", rows.len(), path.display()),
        );

        Ok(Some(rows.len()))
    }
}
