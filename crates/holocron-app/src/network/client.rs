//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT and timeout configuration.

use crate::error::Result;
use holocron::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default Holocron timeouts
    pub fn new() -> Result<Self> {
        Self::with_timeouts(
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
            Duration::from_secs(READ_TIMEOUT_SECS),
        )
    }

    /// Create a client with custom timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(connect)
            .timeout(read)
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response
    ///
    /// Non-success status codes are errors.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let resp = self.inner.get(url).send()?.error_for_status()?;
        let data = resp.json::<T>()?;
        Ok(data)
    }

    /// GET a URL, mapping 404 to `None`
    pub fn get_json_opt<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        tracing::debug!(%url, "GET");
        let resp = self.inner.get(url).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let data = resp.error_for_status()?.json::<T>()?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_client_custom_timeouts() {
        let client = HttpClient::with_timeouts(Duration::from_secs(1), Duration::from_secs(2));
        assert!(client.is_ok());
    }

    #[test]
    fn test_get_json_invalid_url() {
        let client = HttpClient::new().unwrap();
        let result: Result<serde_json::Value> = client.get_json("http://invalid.invalid.invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_json_opt_invalid_url() {
        let client = HttpClient::new().unwrap();
        let result: Result<Option<serde_json::Value>> =
            client.get_json_opt("http://invalid.invalid.invalid");
        assert!(result.is_err());
    }
}
