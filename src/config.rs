//! Configuration for the fixture store
//!
//! Runtime settings are loaded from a JSON file so notification and
//! logging behavior can be adjusted without recompiling. A missing or
//! invalid file is never fatal: the defaults below are used instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default location of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/store_config.json";

/// Complete store configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Change notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Publish a SlotChange whenever a slot is written
    pub enabled: bool,
    /// Broadcast buffer size; lagging subscribers drop the oldest entries
    pub channel_capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            channel_capacity: 64,
        }
    }
}

impl NotificationConfig {
    /// Channel capacity usable by `tokio::sync::broadcast` (at least 1)
    pub fn effective_capacity(&self) -> usize {
        self.channel_capacity.max(1)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Warn that `err` made the loader fall back to the default configuration
///
/// Binaries that load their config before installing a logger call this
/// again once logging is up, so the warning isn't lost.
pub fn log_config_fallback(err: &ConfigError) {
    log::warn!("[Config] {}. Using defaults.", err);
}

impl StoreConfig {
    /// Load configuration from JSON file, reporting why it failed
    ///
    /// # Errors
    /// - `ConfigError::ReadFailed` if the file can't be read
    /// - `ConfigError::ParseFailed` if its JSON doesn't match `StoreConfig`
    pub fn try_load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let display = path.as_ref().display().to_string();
        let contents = fs::read_to_string(&path).map_err(|err| ConfigError::ReadFailed {
            path: display.clone(),
            reason: err.to_string(),
        })?;
        let config = serde_json::from_str(&contents).map_err(|err| ConfigError::ParseFailed {
            path: display.clone(),
            reason: err.to_string(),
        })?;

        log::info!("[Config] Loaded configuration from {}", display);
        Ok(config)
    }

    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The parsed configuration, or the defaults if the file doesn't exist
    /// or its JSON is invalid
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        Self::try_load_from_file(path).unwrap_or_else(|err| {
            log_config_fallback(&err);
            Self::default()
        })
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }
}
