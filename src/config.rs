//! Configuration for the Periplus personalization engine
//!
//! All tunables are plain serde structs with sensible defaults so the
//! engine runs with zero configuration. An optional TOML file can override
//! the scoring curve and the presenter's display policy.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the usage store location
pub const STORE_PATH_ENV: &str = "PERIPLUS_DATA_PATH";

/// Parameters of the recency/frequency scoring curve
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per-day decay multiplier, in (0, 1). 0.8 means roughly a 20% score
    /// reduction per day of inactivity.
    pub decay_base: f64,

    /// Cap on elapsed days fed into the decay exponent. Keeps ordering
    /// stable for arbitrarily old records instead of letting them
    /// underflow toward zero.
    pub decay_window_days: f64,

    /// Display-magnitude multiplier; does not affect ordering
    pub score_scale: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay_base: 0.8,
            decay_window_days: 30.0,
            score_scale: 100.0,
        }
    }
}

/// Display policy for the suggestion panel
///
/// The thresholds are product policy, not mathematical necessity; they
/// exist to avoid showing a near-empty panel to new users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Minimum entries a ranking view needs to count as populated
    pub min_entries_per_view: usize,

    /// How many of the three views must be populated before the panel
    /// becomes visible
    pub min_populated_views: usize,

    /// Entries shown per view once visible
    pub max_items_per_view: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            min_entries_per_view: 2,
            min_populated_views: 2,
            max_items_per_view: 5,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scoring curve parameters
    pub scoring: ScoringConfig,

    /// Suggestion panel display policy
    pub presenter: PresenterConfig,

    /// Explicit usage store location; when absent the path is resolved
    /// from the environment or the platform data directory
    pub store_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

/// Default usage store location under the platform data directory
pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("periplus")
        .join("usage.json")
}

/// Resolve the usage store path from CLI arg, env var, config file, or
/// the platform default, in that order
pub fn resolve_store_path(cli_path: Option<PathBuf>, config: &EngineConfig) -> PathBuf {
    cli_path
        .or_else(|| std::env::var(STORE_PATH_ENV).ok().map(PathBuf::from))
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(default_store_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.scoring.decay_base, 0.8);
        assert_eq!(config.scoring.decay_window_days, 30.0);
        assert_eq!(config.presenter.min_entries_per_view, 2);
        assert_eq!(config.presenter.min_populated_views, 2);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let raw = r#"
            [scoring]
            decay_base = 0.9

            [presenter]
            max_items_per_view = 3
        "#;

        let config: EngineConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.scoring.decay_base, 0.9);
        // Untouched fields keep their defaults
        assert_eq!(config.scoring.decay_window_days, 30.0);
        assert_eq!(config.presenter.max_items_per_view, 3);
        assert_eq!(config.presenter.min_entries_per_view, 2);
    }

    #[test]
    fn test_explicit_store_path_wins_over_default() {
        let config = EngineConfig {
            store_path: Some(PathBuf::from("/tmp/usage.json")),
            ..Default::default()
        };
        let resolved = resolve_store_path(None, &config);
        // CLI and env unset in this test path; config value applies unless
        // the environment overrides it
        if std::env::var(STORE_PATH_ENV).is_err() {
            assert_eq!(resolved, PathBuf::from("/tmp/usage.json"));
        }
    }

    #[test]
    fn test_cli_path_takes_precedence() {
        let config = EngineConfig {
            store_path: Some(PathBuf::from("/tmp/from-config.json")),
            ..Default::default()
        };
        let resolved = resolve_store_path(Some(PathBuf::from("/tmp/from-cli.json")), &config);
        assert_eq!(resolved, PathBuf::from("/tmp/from-cli.json"));
    }
}
