//! Personalization engine facade
//!
//! Wires the usage store, interaction tracker, and ranking views behind
//! the surface consumed by the host UI: record a navigation event, query
//! the three ranked views, reset. The engine is an explicit object with a
//! constructed lifecycle, passed by reference to the components that need
//! it; there is no ambient global store.

use crate::config::{default_store_path, EngineConfig};
use crate::ranking;
use crate::storage::{JsonFileBackend, MemoryBackend, StorageBackend};
use crate::store::UsageStore;
use crate::tracker::record_visit;
use crate::types::{SuggestionItem, UsageMap};
use chrono::Utc;
use tracing::info;

/// The adaptive navigation personalization engine
pub struct PersonalizationEngine {
    store: UsageStore,
    config: EngineConfig,
}

impl PersonalizationEngine {
    /// Build an engine over an explicit storage backend
    pub fn new(backend: Box<dyn StorageBackend>, config: EngineConfig) -> Self {
        let store = UsageStore::open(backend);
        info!(
            store = %store.location(),
            records = store.len(),
            "personalization engine ready"
        );
        Self { store, config }
    }

    /// Build an engine persisting to the configured store path, falling
    /// back to the platform default location
    pub fn with_default_storage(config: EngineConfig) -> Self {
        let path = config
            .store_path
            .clone()
            .unwrap_or_else(default_store_path);
        Self::new(Box::new(JsonFileBackend::new(path)), config)
    }

    /// Build a volatile engine with no persistence, for tests and
    /// degraded operation
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(Box::new(MemoryBackend::new()), config)
    }

    /// Record one navigation event. Synchronous: the updated record is
    /// observable by any read issued after this returns. Never fails from
    /// the caller's perspective; persistence faults degrade to
    /// in-memory-only operation.
    pub fn record(&mut self, target_id: &str, display_name: &str) {
        record_visit(
            &mut self.store,
            target_id,
            display_name,
            Utc::now(),
            &self.config.scoring,
        );
    }

    /// Most-visited targets, limited
    pub fn frequently_used_items(&self, limit: usize) -> Vec<SuggestionItem> {
        ranking::top_by_frequency(self.store.records(), limit)
    }

    /// Most-recently-visited targets, limited
    pub fn recently_used_items(&self, limit: usize) -> Vec<SuggestionItem> {
        ranking::top_by_recency(self.store.records(), limit)
    }

    /// Score-ranked suggestions, excluding the target the user is
    /// currently on. Scores are computed fresh against the current clock
    /// on every call.
    pub fn personalized_suggestions(
        &self,
        current_target_id: &str,
        limit: usize,
    ) -> Vec<SuggestionItem> {
        ranking::top_by_score(
            self.store.records(),
            current_target_id,
            limit,
            Utc::now(),
            &self.config.scoring,
        )
    }

    /// Clear all usage state, persisted and in-memory, synchronously
    pub fn reset_usage_data(&mut self) {
        self.store.clear();
        info!("usage data reset");
    }

    /// Number of distinct targets ever visited
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Where usage data persists, for status output
    pub fn store_location(&self) -> String {
        self.store.location()
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only snapshot of the raw usage mapping
    pub fn records(&self) -> &UsageMap {
        self.store.records()
    }
}
