//! Application settings management
//!
//! User preferences read at startup. Command-line flags override them.

use crate::config::files::SETTINGS;
use crate::data::storage;
use crate::error::Result;
use holocron::config::api::DEFAULT_BASE_URL;
use holocron::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    // === Catalog ===
    /// Base URL of the reference API (without the `/api` prefix)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // === Network ===
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read timeout in seconds
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,

    // === Storage ===
    /// Directory for durable storage (defaults to the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    CONNECT_TIMEOUT_SECS
}

fn default_read_timeout() -> u64 {
    READ_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            api_base_url: default_api_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            data_dir: None,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the default config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&storage::data_path(SETTINGS)?)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(storage::load_from::<Settings>(path)?.unwrap_or_default())
    }

    /// Save settings to the default config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&storage::data_path(SETTINGS)?)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// API base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Directory used for durable storage
    pub fn storage_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => storage::config_dir(),
        }
    }
}
