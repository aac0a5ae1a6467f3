//! Catalog types
//!
//! Shared types used by every view and by the favorites store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Helper functions
// =============================================================================

/// Derive the item identifier from its URL
///
/// The identifier is the last non-empty path segment, so both
/// `https://swapi.dev/api/people/1/` and `/people/1` yield `"1"`.
pub fn item_id(url: &str) -> Option<&str> {
    url.split('/').filter(|s| !s.is_empty()).last()
}

// =============================================================================
// Category
// =============================================================================

/// One of the three entity kinds served by the reference API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Vehicles,
    Planets,
}

impl Category {
    /// All categories in fetch and render order
    pub const ALL: [Category; 3] = [Category::People, Category::Vehicles, Category::Planets];

    /// API path segment (e.g. `people`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Vehicles => "vehicles",
            Category::Planets => "planets",
        }
    }

    /// Human readable section label
    pub fn label(&self) -> &'static str {
        match self {
            Category::People => "Characters",
            Category::Vehicles => "Vehicles",
            Category::Planets => "Planets",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Category::People => 0,
            Category::Vehicles => 1,
            Category::Planets => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Category::People),
            "vehicles" => Ok(Category::Vehicles),
            "planets" => Ok(Category::Planets),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

// =============================================================================
// CatalogItem - A single fetched entity record
// =============================================================================

/// An entity fetched from the remote catalog
///
/// Only `url` and `name` are interpreted. Everything else the API sent is
/// kept verbatim in `fields`, so a favorite stores a shallow copy of the
/// item as it was at favoriting time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable identifier, unique across the catalog
    pub url: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Category-specific fields (`birth_year`, `model`, `population`, ...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CatalogItem {
    /// Create an item with no category-specific fields
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            fields: Map::new(),
        }
    }

    /// Set a category-specific field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Identifier used in navigation paths
    pub fn id(&self) -> Option<&str> {
        item_id(&self.url)
    }

    /// Get a field rendered as text
    ///
    /// Strings are returned as-is, numbers and booleans are formatted.
    /// Arrays, objects and nulls have no text form.
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            "url" => return Some(self.url.clone()),
            "name" => return Some(self.name.clone()),
            _ => {}
        }
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

// =============================================================================
// FavoriteEntry - A catalog item tagged with its category
// =============================================================================

/// A favorited item together with the category it was favorited from
///
/// The raw item does not say which category it belongs to, so the tag is
/// recorded when the favorite is created. It is persisted under `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    /// The item as it was when favorited
    #[serde(flatten)]
    pub item: CatalogItem,
    /// Category tag
    #[serde(rename = "type")]
    pub category: Category,
}

impl FavoriteEntry {
    /// Tag an item with its category
    pub fn new(item: CatalogItem, category: Category) -> Self {
        let mut item = item;
        // `type` is reserved for the tag
        item.fields.remove("type");
        Self { item, category }
    }

    /// Get the URL
    pub fn url(&self) -> &str {
        &self.item.url
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.item.name
    }
}
