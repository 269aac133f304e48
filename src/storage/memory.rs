//! Volatile in-memory backend
//!
//! Used by tests and as the degraded-mode fallback when no durable
//! location is available: persistence faults are non-fatal, and the
//! session continues with in-memory state only.

use crate::error::Result;
use crate::storage::StorageBackend;
use crate::types::UsageMap;
use std::sync::Mutex;

/// In-memory storage backend; state is lost when the backend is dropped
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<UsageMap>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with records, for tests
    pub fn with_records(records: UsageMap) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UsageMap> {
        // A poisoned lock still holds valid data; recover it
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<UsageMap> {
        Ok(self.lock().clone())
    }

    fn save(&self, records: &UsageMap) -> Result<()> {
        *self.lock() = records.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }

    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }
}
