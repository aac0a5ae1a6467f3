//! Durable key/value storage
//!
//! A small `localStorage`-style interface (string values under string keys)
//! plus the JSON file helpers used for settings.

use crate::config::app::NAME;
use crate::config::files::STORAGE_EXT;
use crate::error::{AppError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME))
        .ok_or_else(|| {
            AppError::Config(
                "Could not determine config directory. HOME environment variable may not be set."
                    .to_string(),
            )
        })
}

/// Get path to a specific data file in the default config directory
pub fn data_path(filename: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

// =============================================================================
// File helpers
// =============================================================================

/// Create a directory if it doesn't exist
fn create_dir_if_needed(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        let msg = match e.kind() {
            ErrorKind::PermissionDenied => {
                format!("Permission denied: cannot create directory {:?}", path)
            }
            _ => format!("Failed to create directory {:?}: {}", path, e),
        };
        AppError::Storage(msg)
    })
}

/// Read file contents, `None` if the file does not exist
fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            ErrorKind::PermissionDenied => Err(AppError::Storage(format!(
                "Permission denied: cannot read {:?}",
                path
            ))),
            _ => Err(AppError::Storage(format!("Failed to read {:?}: {}", path, e))),
        },
    }
}

/// Write file contents, creating parent directories
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_if_needed(parent)?;
        }
    }

    fs::write(path, content).map_err(|e| {
        let msg = match e.kind() {
            ErrorKind::PermissionDenied => {
                format!("Permission denied: cannot write to {:?}", path)
            }
            ErrorKind::ReadOnlyFilesystem => {
                format!("Cannot write to {:?}: filesystem is read-only", path)
            }
            _ => format!("Failed to write to {:?}: {}", path, e),
        };
        AppError::Storage(msg)
    })
}

/// Load data from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist or is blank.
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match read_file(path)? {
        Some(c) => c,
        None => return Ok(None),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let data = serde_json::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse {:?}: {}", path, e)))?;

    Ok(Some(data))
}

/// Save data to a JSON file at a specific path
///
/// Creates parent directories if they don't exist.
pub fn save_to<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Config(format!("Failed to serialize data: {}", e)))?;

    write_file(path, &content)
}

// =============================================================================
// DurableStorage - key/value persistence
// =============================================================================

/// Persistent string storage keyed by name
///
/// Values survive restarts. Every `set` overwrites the whole value.
pub trait DurableStorage: Send {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at a specific directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File path for a key
    ///
    /// Keys are plain names; anything that could escape the directory is rejected.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{key}.{STORAGE_EXT}")))
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(&self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        write_file(&self.path_for(key)?, value)
    }
}

/// In-memory storage that lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.into(), value.into());
        storage
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
