//! JSON file slot
//!
//! One slot is one file `<data_dir>/<slot>.json` holding a JSON array of
//! requests. Saves go through a temp file in the same directory that is then
//! persisted over the slot, so readers see either the old or the new array.

use super::{RecordStore, StoreError, StoreResult};
use crate::models::Request;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Request slot backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Slot `<slot>.json` inside `data_dir`
    pub fn open(data_dir: impl AsRef<Path>, slot: &str) -> StoreResult<Self> {
        let slot = slot.trim();
        if slot.is_empty() || slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(StoreError::InvalidPath(format!(
                "slot name '{}' must be a plain file name",
                slot
            )));
        }
        Ok(Self {
            path: data_dir.as_ref().join(format!("{}.json", slot)),
        })
    }

    /// Slot at an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> StoreResult<Vec<Request>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn save(&mut self, records: &[Request]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(records)?;

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;

        temp_file.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        Ok(())
    }
}
