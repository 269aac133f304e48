//! The usage store: exclusive owner of all usage records
//!
//! Wraps a [`StorageBackend`] with the resilience policy the engine
//! promises its host UI: corrupted or unreadable persisted state is
//! discarded with a warning and the session starts cold; persistence
//! failures after that are logged and swallowed, with the in-memory
//! mapping staying authoritative for the rest of the session. No error
//! from this layer ever reaches the caller of the write path.

use crate::storage::StorageBackend;
use crate::types::{TargetId, UsageMap, UsageRecord};
use tracing::{debug, warn};

/// Durable mapping from target id to usage record
///
/// Exclusively owns the in-memory mapping; other components read through
/// accessors and mutate only via the crate-internal write path.
pub struct UsageStore {
    records: UsageMap,
    backend: Box<dyn StorageBackend>,
}

impl UsageStore {
    /// Open a store over the given backend, loading persisted state once.
    ///
    /// Missing, corrupt, or structurally invalid persisted data yields an
    /// empty store rather than an error: corrupted local state must never
    /// block the UI. Partial repair is deliberately not attempted, to
    /// avoid propagating inconsistent history.
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let records = match backend.load() {
            Ok(map) => {
                if map.iter().all(|(id, record)| !id.is_empty() && record.is_valid()) {
                    map
                } else {
                    warn!(
                        store = %backend.describe(),
                        "persisted usage data is structurally invalid, starting fresh"
                    );
                    UsageMap::new()
                }
            }
            Err(e) => {
                warn!(
                    store = %backend.describe(),
                    error = %e,
                    "could not read persisted usage data, starting fresh"
                );
                UsageMap::new()
            }
        };

        Self { records, backend }
    }

    /// The current snapshot of all records
    pub fn records(&self) -> &UsageMap {
        &self.records
    }

    /// Look up a single record
    pub fn get(&self, target_id: &TargetId) -> Option<&UsageRecord> {
        self.records.get(target_id)
    }

    /// Number of distinct targets ever visited
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any usage has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Where this store persists, for logs and status output
    pub fn location(&self) -> String {
        self.backend.describe()
    }

    /// Insert or replace a record. Crate-internal: the interaction tracker
    /// is the only legitimate writer.
    pub(crate) fn upsert(&mut self, target_id: TargetId, record: UsageRecord) {
        self.records.insert(target_id, record);
    }

    /// Persist the full mapping. Backend failures (quota, disabled
    /// storage) are logged and swallowed; the in-memory mapping remains
    /// authoritative for the session.
    pub(crate) fn persist(&self) {
        if let Err(e) = self.backend.save(&self.records) {
            warn!(
                store = %self.backend.describe(),
                error = %e,
                "failed to persist usage data, continuing in-memory"
            );
        }
    }

    /// Remove every record, in memory and from the backend
    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = self.backend.clear() {
            warn!(
                store = %self.backend.describe(),
                error = %e,
                "failed to clear persisted usage data"
            );
        }
        debug!("usage store cleared");
    }
}
