//! SWAPI provider
//!
//! Implementation of `CatalogSource` for the Star Wars API
//! (<https://swapi.dev/>).

use holocron::catalog::{CatalogItem, Category};
use holocron::config::api::{DEFAULT_BASE_URL, PATH_PREFIX};
use serde::Deserialize;
use serde_json::Value;

use crate::config::providers::SWAPI_ID;
use crate::data::Settings;
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::CatalogSource;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

/// Paged collection response; only the first page is used
#[derive(Debug, Deserialize)]
struct SwapiPage {
    #[serde(default)]
    results: Vec<Value>,
}

impl SwapiPage {
    /// Entries that identify an item; the rest are skipped
    fn into_items(self) -> Vec<CatalogItem> {
        let total = self.results.len();
        let items: Vec<CatalogItem> = self.results.into_iter().filter_map(usable_item).collect();
        if items.len() < total {
            tracing::warn!(skipped = total - items.len(), "skipped unusable listing entries");
        }
        items
    }
}

/// Accept a payload only if it identifies an item
fn usable_item(value: Value) -> Option<CatalogItem> {
    match serde_json::from_value::<CatalogItem>(value) {
        Ok(item) if !item.url.trim().is_empty() => Some(item),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "payload is not an item");
            None
        }
    }
}

// =============================================================================
// SwapiSource
// =============================================================================

/// Star Wars API source
pub struct SwapiSource {
    client: HttpClient,
    base_url: String,
}

impl SwapiSource {
    /// Create a source using the default server
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a source with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a source from user settings (base URL and timeouts)
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_timeouts(settings.connect_timeout(), settings.read_timeout())?,
            base_url: settings.api_base().to_string(),
        })
    }

    /// Collection endpoint, e.g. `https://swapi.dev/api/people/`
    fn category_url(&self, category: Category) -> String {
        format!("{}{}/{}/", self.base_url, PATH_PREFIX, category)
    }

    /// Detail endpoint, e.g. `https://swapi.dev/api/people/1/`
    fn item_url(&self, category: Category, id: &str) -> String {
        format!("{}{}/{}/{}/", self.base_url, PATH_PREFIX, category, id)
    }
}

impl CatalogSource for SwapiSource {
    fn id(&self) -> &'static str {
        SWAPI_ID
    }

    fn list_category(&self, category: Category) -> Result<Vec<CatalogItem>> {
        let page: SwapiPage = self.client.get_json(&self.category_url(category))?;
        Ok(page.into_items())
    }

    fn get_item(&self, category: Category, id: &str) -> Result<Option<CatalogItem>> {
        let value: Option<Value> = self.client.get_json_opt(&self.item_url(category, id))?;
        Ok(value.and_then(usable_item))
    }
}
