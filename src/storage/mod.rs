//! Storage layer for the Periplus usage store
//!
//! Provides the backend abstraction and concrete implementations for
//! persisting the usage mapping across process restarts. The mapping is
//! always read in full and written in full; there are no partial or
//! field-level writes.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;
use crate::types::UsageMap;

/// Storage backend trait for the persisted usage mapping
///
/// Backends are dumb byte shovels: they report failures honestly via
/// `Result` and leave the soft-fail resilience policy (discard corrupt
/// data, keep running in memory) to the [`UsageStore`](crate::store::UsageStore).
pub trait StorageBackend: Send {
    /// Read the persisted mapping. A store that has never been written
    /// yields an empty mapping, not an error.
    fn load(&self) -> Result<UsageMap>;

    /// Persist the full mapping, overwriting prior state entirely
    fn save(&self, records: &UsageMap) -> Result<()>;

    /// Remove all persisted state
    fn clear(&self) -> Result<()>;

    /// Human-readable location of the backing store, for logs and status
    fn describe(&self) -> String;
}
