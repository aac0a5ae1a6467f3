//! Error types for Holocron
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the catalog core
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for Holocron
pub type Result<T> = std::result::Result<T, CatalogError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    if let Some(status) = e.status() {
        return format!("Server returned {status}");
    }
    format!("Network error: {e}")
}
