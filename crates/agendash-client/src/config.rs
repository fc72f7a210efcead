//! Client configuration.
//!
//! All settings live in a single `config.toml` at
//! `~/.config/agendash/config.toml` by default. The bearer token is NOT
//! part of the file; it comes from the `AGENDASH_TOKEN` environment
//! variable so credentials never land on disk here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the agendash client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Backend connection settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the dashboard backend.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: 10,
        }
    }
}

/// Display settings for terminal output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum number of entries in the upcoming list.
    pub upcoming_limit: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            upcoming_limit: agendash_core::DEFAULT_UPCOMING_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agendash")
    }
}
