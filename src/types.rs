//! Core data types for the Periplus personalization engine
//!
//! This module defines the fundamental data structures: navigation target
//! identifiers, per-target usage records, and the suggestion items emitted
//! to consumers. These types form the foundation of the adaptive navigation
//! personalization engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier for a navigation target
///
/// Wraps the target's string key (typically a route path such as
/// `/billing`) to provide type safety and prevent mixing target ids with
/// other string values in the system.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    /// Create a target id from a string key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying string key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the key is empty (empty keys are never recorded)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The full usage mapping: one record per distinct target ever visited
pub type UsageMap = BTreeMap<TargetId, UsageRecord>;

/// Usage record for a single navigation target
///
/// One record exists per distinct target ever visited. Records are created
/// on the first visit, mutated in place on every subsequent visit, and
/// destroyed only by the bulk reset operation. The serialized field names
/// match the persisted store layout (camelCase, RFC 3339 timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Human-readable label shown in suggestion UI; last-seen value wins
    pub display_name: String,

    /// Total number of recorded visits; monotonically non-decreasing
    pub click_count: u32,

    /// Time of the most recent visit
    pub last_accessed_at: DateTime<Utc>,

    /// Score cached at write time; a display hint only. Rankings recompute
    /// scores against the reader's clock, never this field.
    #[serde(default)]
    pub cached_score: f64,

    /// Unknown fields from newer versions of the store layout, preserved
    /// across load/save round trips
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UsageRecord {
    /// Create the record for a first-ever visit to a target
    pub fn first_visit(display_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            display_name: display_name.into(),
            click_count: 1,
            last_accessed_at: now,
            cached_score: 0.0,
            extra: serde_json::Map::new(),
        }
    }

    /// Apply a repeat visit: increment the count, re-stamp the access time,
    /// and adopt the latest display name (supports renamed destinations
    /// without orphaning history)
    pub fn visit(&mut self, display_name: &str, now: DateTime<Utc>) {
        self.click_count = self.click_count.saturating_add(1);
        self.last_accessed_at = now;
        self.display_name = display_name.to_string();
    }

    /// Structural validity check used when loading persisted data.
    /// A record that claims zero visits cannot have been produced by this
    /// engine and marks the snapshot as corrupt.
    pub fn is_valid(&self) -> bool {
        self.click_count >= 1
    }
}

/// A ranked suggestion emitted to consumers
///
/// Transient, derived, read-only view of a usage record; holds no
/// connection to the store it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Target this suggestion navigates to
    pub target_id: TargetId,

    /// Label to display
    pub display_name: String,

    /// Total recorded visits at the time of the query
    pub click_count: u32,

    /// Most recent visit at the time of the query
    pub last_accessed_at: DateTime<Utc>,
}

impl SuggestionItem {
    /// Build a suggestion from a store entry
    pub fn from_record(target_id: &TargetId, record: &UsageRecord) -> Self {
        Self {
            target_id: target_id.clone(),
            display_name: record.display_name.clone(),
            click_count: record.click_count,
            last_accessed_at: record.last_accessed_at,
        }
    }
}
