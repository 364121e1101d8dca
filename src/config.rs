//! Startup configuration.
//!
//! Read once at launch from `<config dir>/pulseboard/config.json`. Every
//! field has a default, so a partial file only overrides what it names and a
//! missing or broken file yields the defaults. Nothing is ever written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "pulseboard";
const CONFIG_FILE: &str = "config.json";

/// Timing and window settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Quiet period before a burst of resizes is acted on
    pub resize_debounce_ms: u64,
    /// Delay between bootstrap and chart construction
    pub chart_init_delay_ms: u64,
    /// Initial window size in logical pixels
    pub window_size: [f32; 2],
    /// Catalogue to load instead of the built-in content
    pub catalogue_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            chart_init_delay_ms: 100,
            window_size: [1200.0, 800.0],
            catalogue_path: None,
        }
    }
}

impl DashboardConfig {
    /// Location of the per-user config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Loads `path` when it exists, falling back to defaults on any problem.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Using default config");
                Self::default()
            }
        }
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn chart_init_delay(&self) -> Duration {
        Duration::from_millis(self.chart_init_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.chart_init_delay(), Duration::from_millis(100));
        assert_eq!(config.catalogue_path, None);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"resize_debounce_ms": 400}"#).unwrap();
        assert_eq!(config.resize_debounce_ms, 400);
        assert_eq!(config.chart_init_delay_ms, 100);
        assert_eq!(config.window_size, [1200.0, 800.0]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("pulseboard_missing_config.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(DashboardConfig::load_or_default(Some(&path)), DashboardConfig::default());
        assert_eq!(DashboardConfig::load_or_default(None), DashboardConfig::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = std::env::temp_dir().join("pulseboard_malformed_config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(DashboardConfig::load(&path).is_err());
        assert_eq!(DashboardConfig::load_or_default(Some(&path)), DashboardConfig::default());
        let _ = std::fs::remove_file(&path);
    }
}
