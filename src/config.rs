//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::submission::{DEFAULT_RESET_DELAY, DEFAULT_SUBMIT_DELAY};

/// Environment variable pointing at an alternate config file
pub const CONFIG_PATH_ENV: &str = "INTAKE_TUI_CONFIG";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Simulated submission round trip, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Confirmation window before the form resets, in milliseconds
    pub reset_delay_ms: Option<u64>,
    /// Show "Looks good!" hints under filled personal fields
    pub show_success_hints: Option<bool>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("in", "graphura", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: IntakeConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Using default configuration: {err:#}");
            Self::default()
        })
    }

    /// Save configuration to a file
    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RESET_DELAY)
    }

    pub fn show_success_hints(&self) -> bool {
        self.show_success_hints.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = IntakeConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.reset_delay_ms.is_none());
        assert!(config.show_success_hints.is_none());
    }

    #[test]
    fn test_default_delays() {
        let config = IntakeConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.reset_delay(), Duration::from_millis(3000));
        assert!(config.show_success_hints());
    }

    #[test]
    fn test_overridden_delays() {
        let config = IntakeConfig {
            submit_delay_ms: Some(10),
            reset_delay_ms: Some(20),
            show_success_hints: Some(false),
        };
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
        assert_eq!(config.reset_delay(), Duration::from_millis(20));
        assert!(!config.show_success_hints());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: IntakeConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"reset_delay_ms": 500, "unknown_field": "value"}"#;
        let parsed: IntakeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.reset_delay_ms, Some(500));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = IntakeConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(config.submit_delay_ms.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = IntakeConfig {
            submit_delay_ms: Some(250),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = IntakeConfig::load_from(&path).unwrap();

        assert_eq!(loaded.submit_delay_ms, Some(250));
        assert!(loaded.reset_delay_ms.is_none());
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = IntakeConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
