// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Verifica se un file può essere creato o sovrascritto.
///
/// - file missing → true
/// - file exists and `force` → true
/// - file exists without `force` → ask the user; false if declined
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display()))? {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        Ok(false)
    }
}
