//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory. A missing file
//! falls back to defaults; a malformed file is a `ConfigError` so the caller
//! can decide whether to warn and continue or abort.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants;

/// Errors from loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Tracker timing and de-duplication settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Idle-scroll debounce in milliseconds
    pub idle_debounce_ms: u64,
    /// Settle delay after a tracker-initiated scroll in milliseconds
    pub settle_delay_ms: u64,
    /// Suppress auto-capture within this many lines of an existing bookmark
    pub dedup_tolerance: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            idle_debounce_ms: constants::tracker::IDLE_DEBOUNCE.as_millis() as u64,
            settle_delay_ms: constants::tracker::SETTLE_DELAY.as_millis() as u64,
            dedup_tolerance: constants::tracker::DEDUP_TOLERANCE,
        }
    }
}

impl TrackerConfig {
    /// Idle-scroll debounce as a `Duration`
    pub fn idle_debounce(&self) -> Duration {
        Duration::from_millis(self.idle_debounce_ms)
    }

    /// Settle delay as a `Duration`
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: constants::ui::DEFAULT_THEME.to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tracker: TrackerConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tracker.idle_debounce_ms, 2000);
        assert_eq!(config.tracker.settle_delay_ms, 300);
        assert_eq!(config.tracker.dedup_tolerance, 2);
        assert_eq!(config.ui.theme, "tidemark");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.tracker.idle_debounce_ms, 2000);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[tracker]\nidle_debounce_ms = 1500\n\n[ui]\ntheme = \"nord\"").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tracker.idle_debounce_ms, 1500);
        // Unspecified keys keep their defaults
        assert_eq!(config.tracker.settle_delay_ms, 300);
        assert_eq!(config.ui.theme, "nord");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tracker\nbroken").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_duration_accessors() {
        let config = TrackerConfig::default();
        assert_eq!(config.idle_debounce(), Duration::from_millis(2000));
        assert_eq!(config.settle_delay(), Duration::from_millis(300));
    }
}
