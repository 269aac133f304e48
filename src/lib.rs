//! Periplus - Adaptive Navigation Personalization Engine
//!
//! A local, deterministic, single-user engine that observes which
//! navigation targets a user visits, maintains decayed usage statistics
//! per target, and produces ranked suggestions (frequent, recent, and
//! personalized) for the host UI to surface.
//!
//! # Architecture
//!
//! The system is organized into a handful of small layers:
//! - **Types**: core data structures (`UsageRecord`, `SuggestionItem`)
//! - **Storage**: durable persistence backends for the usage mapping
//! - **Scoring**: the pure recency/frequency score function
//! - **Tracker**: the single write path for navigation events
//! - **Ranking**: pure read queries over the usage snapshot
//! - **Presenter**: display policy for the suggestion panel
//!
//! # Example
//!
//! ```
//! use periplus_core::{EngineConfig, PanelState, PersonalizationEngine, SuggestionPresenter};
//!
//! let mut engine = PersonalizationEngine::in_memory(EngineConfig::default());
//! engine.record("/dashboard", "Dashboard");
//! engine.record("/billing", "Billing");
//! engine.record("/billing", "Billing");
//!
//! let frequent = engine.frequently_used_items(5);
//! assert_eq!(frequent[0].target_id.as_str(), "/billing");
//!
//! let suggestions = engine.personalized_suggestions("/billing", 5);
//! assert!(suggestions.iter().all(|s| s.target_id.as_str() != "/billing"));
//!
//! let mut presenter = SuggestionPresenter::new(engine.config().presenter.clone());
//! let view = presenter.evaluate(&engine, "/billing");
//! assert_ne!(view.state, PanelState::Collapsed);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod presenter;
pub mod ranking;
pub mod scoring;
pub mod storage;
pub mod store;
pub mod tracker;
pub mod types;

// Re-export commonly used types
pub use config::{EngineConfig, PresenterConfig, ScoringConfig};
pub use engine::PersonalizationEngine;
pub use error::{PeriplusError, Result};
pub use presenter::{PanelState, PanelView, SuggestionPresenter};
pub use storage::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use store::UsageStore;
pub use types::{SuggestionItem, TargetId, UsageMap, UsageRecord};
