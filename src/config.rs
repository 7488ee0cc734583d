//! Configuration management for timekit
//!
//! This module handles loading, parsing, and validation of configuration
//! files. A config file is entirely optional: defaults cover every field, and
//! callers that never touch this module get the built-in formats.

use crate::constants::{
    DEFAULT_DATETIME_PATTERN, UI_DATETIME_PATTERN, UI_DATE_PATTERN, UI_TIME_PATTERN,
};
use crate::format::{FormatSet, FormatSpec};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatConfig,
    pub logging: LoggingConfig,
}

/// Format pattern configuration
///
/// Patterns use the supported strftime subset (`%Y %m %b %d %H %-I %M %S %p`);
/// anything outside that vocabulary is rejected by [`Config::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Canonical storage format for datetime values
    pub storage_format: String,
    /// Date+time display format
    pub ui_datetime_format: String,
    /// Date-only display format
    pub ui_date_format: String,
    /// Time-only display format
    pub ui_time_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            storage_format: DEFAULT_DATETIME_PATTERN.to_string(),
            ui_datetime_format: UI_DATETIME_PATTERN.to_string(),
            ui_date_format: UI_DATE_PATTERN.to_string(),
            ui_time_format: UI_TIME_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            log::debug!("no config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("timekit.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("timekit").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, pattern) in [
            ("storage_format", &self.formats.storage_format),
            ("ui_datetime_format", &self.formats.ui_datetime_format),
            ("ui_date_format", &self.formats.ui_date_format),
            ("ui_time_format", &self.formats.ui_time_format),
        ] {
            if let Err(e) = FormatSpec::from_pattern(pattern) {
                anyhow::bail!("Invalid {} '{}': {}", name, pattern, e);
            }
        }
        Ok(())
    }

    /// Build the typed format set described by this configuration
    pub fn format_set(&self) -> Result<FormatSet> {
        self.validate()?;
        Ok(FormatSet {
            storage: FormatSpec::from_pattern(&self.formats.storage_format)?,
            ui_datetime: FormatSpec::from_pattern(&self.formats.ui_datetime_format)?,
            ui_date: FormatSpec::from_pattern(&self.formats.ui_date_format)?,
            ui_time: FormatSpec::from_pattern(&self.formats.ui_time_format)?,
        })
    }
}
