//! JSON-backed storage for work types, punches and the operation log.

pub mod json_store;
pub mod log;

pub use json_store::JsonStore;

use crate::models::log_entry::LogEntry;
use crate::models::punch_record::PunchRecord;
use crate::models::work_type::WorkType;
use std::path::{Path, PathBuf};

pub const WORK_TYPES_FILE: &str = "worktypes.json";
pub const PUNCHES_FILE: &str = "punches.json";
pub const LOG_FILE: &str = "log.json";

pub type WorkTypeStore = JsonStore<WorkType>;
pub type PunchStore = JsonStore<PunchRecord>;
pub type LogStore = JsonStore<LogEntry>;

/// All stores living in one data directory.
/// Nothing is read until a store is asked to load.
pub struct Storage {
    dir: PathBuf,
    pub work_types: WorkTypeStore,
    pub punches: PunchStore,
    pub log: LogStore,
}

impl Storage {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            work_types: JsonStore::new(dir, WORK_TYPES_FILE),
            punches: JsonStore::new(dir, PUNCHES_FILE),
            log: JsonStore::new(dir, LOG_FILE),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
