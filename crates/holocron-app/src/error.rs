//! Error types for Holocron app services
//!
//! Application-level errors that wrap core errors and add app-specific variants.

use holocron::error::CatalogError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Catalog(CatalogError::Network(e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Catalog(CatalogError::Parse(e))
    }
}

/// Result type alias for Holocron app services
pub type Result<T> = std::result::Result<T, AppError>;
