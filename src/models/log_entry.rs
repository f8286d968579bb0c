use serde::{Deserialize, Serialize};

/// One line of the internal operation log (`log.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String, // RFC 3339, local offset
    pub operation: String,
    pub target: String,
    pub message: String,
}
