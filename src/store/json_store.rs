//! Whole-file JSON list store.
//!
//! Every load reads the full document, every save rewrites it. Saves go
//! through a temporary file in the same directory which is then renamed over
//! the target, so an interrupted write never leaves a truncated document.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _item: PhantomData<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the whole list.
    ///
    /// - creates the storage directory if missing
    /// - missing or blank file → empty list
    /// - unparsable content → [`AppError::CorruptStore`]
    pub fn load_all(&self) -> AppResult<Vec<T>> {
        self.ensure_dir()?;

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| AppError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file with the indented JSON rendering of `items`.
    pub fn save_all(&self, items: &[T]) -> AppResult<()> {
        let dir = self.ensure_dir()?;

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Serialize(format!("{}: {e}", self.path.display())))?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        Ok(())
    }

    fn ensure_dir(&self) -> AppResult<&Path> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        Ok(dir)
    }
}
