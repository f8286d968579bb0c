//! Unified application error type.
//! All modules (store, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Store file '{}' is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(String),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Please provide a valid work type number (got '{0}'). Use 'cpunch' to see available work types.")]
    InvalidNumber(String),

    #[error("Invalid work type index {0}. Use 'cpunch' to see available work types.")]
    InvalidIndex(i64),

    #[error("Invalid rate: '{0}'")]
    InvalidRate(String),

    #[error("Work type name cannot be empty")]
    InvalidName,

    // ---------------------------
    // Punch state
    // ---------------------------
    #[error("No work types available. Add a work type first.")]
    NoWorkTypes,

    #[error("You have an ongoing punch for '{0}'. Please punch out first.")]
    OngoingPunchExists(String),

    #[error("No ongoing punch found.")]
    NoOngoingPunch,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Input or precondition failures: reported to the user, not fatal.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidNumber(_)
                | AppError::InvalidIndex(_)
                | AppError::InvalidRate(_)
                | AppError::InvalidName
                | AppError::NoWorkTypes
                | AppError::OngoingPunchExists(_)
                | AppError::NoOngoingPunch
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
