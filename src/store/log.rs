use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::store::Storage;
use crate::ui::messages::warning;
use chrono::Local;

/// Append an entry to the internal operation log.
pub fn ttlog(storage: &Storage, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let mut entries = storage.log.load_all()?;

    entries.push(LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    });

    storage.log.save_all(&entries)
}

/// Like [`ttlog`], but a failure only prints a warning.
pub fn ttlog_or_warn(storage: &Storage, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(storage, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
