//! Durable JSON-file backend for the usage store
//!
//! Persists the usage mapping as a single JSON object keyed by target id.
//! Saves are atomic: the mapping is written to a sibling temp file and
//! renamed over the target, so a crash mid-save never leaves a
//! half-written mapping behind.
//!
//! Concurrent processes sharing the same file resolve by last-write-wins;
//! cross-process merge semantics are explicitly out of scope.

use crate::error::Result;
use crate::storage::StorageBackend;
use crate::types::UsageMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// JSON-file storage backend
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend persisting to the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<UsageMap> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no persisted usage data, starting empty");
            return Ok(UsageMap::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let records: UsageMap = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded persisted usage data"
        );
        Ok(records)
    }

    fn save(&self, records: &UsageMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(records)?;
        let temp = self.temp_path();
        fs::write(&temp, serialized)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
