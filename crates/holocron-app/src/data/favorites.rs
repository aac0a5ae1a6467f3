//! Favorites store
//!
//! Ordered list of favorited items mirrored to durable storage under a
//! single key. Every toggle rewrites the whole list.

use holocron::catalog::{CatalogItem, Category, FavoriteEntry};
use holocron::config::storage::FAVORITES_KEY;
use serde_json::Value;

use crate::data::storage::DurableStorage;
use crate::error::Result;

/// Outcome of [`FavoritesStore::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Favorited items, unique by URL, in the order they were added
///
/// The in-memory list is the source of truth for the session. Storage
/// failures are logged and never undo a toggle.
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
    storage: Box<dyn DurableStorage>,
}

impl FavoritesStore {
    /// Load favorites from storage
    ///
    /// A missing, blank, unreadable or unparsable value yields an empty store.
    pub fn load(storage: Box<dyn DurableStorage>) -> Self {
        let entries = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => parse_entries(&raw),
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = entries.len(), "favorites loaded");
        Self { entries, storage }
    }

    /// Whether an item with the same URL is favorited
    pub fn contains(&self, item: &CatalogItem) -> bool {
        self.contains_url(&item.url)
    }

    /// Whether a URL is favorited
    pub fn contains_url(&self, url: &str) -> bool {
        self.entries.iter().any(|e| e.url() == url)
    }

    /// Add the item if absent, remove it if present, then persist
    pub fn toggle(&mut self, item: &CatalogItem, category: Category) -> Toggle {
        let outcome = if let Some(pos) = self.entries.iter().position(|e| e.url() == item.url) {
            self.entries.remove(pos);
            Toggle::Removed
        } else {
            self.entries.push(FavoriteEntry::new(item.clone(), category));
            Toggle::Added
        };

        if let Err(e) = self.persist() {
            tracing::error!(error = %e, url = %item.url, "failed to persist favorites");
        }
        outcome
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Entry for a URL
    pub fn get(&self, url: &str) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.url() == url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole list and overwrite the stored value
    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }
}

/// Parse the stored array element by element
///
/// Malformed elements and duplicate URLs after the first are skipped.
fn parse_entries(raw: &str) -> Vec<FavoriteEntry> {
    let values: Vec<Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(error = %e, "stored favorites are not valid, starting empty");
            return Vec::new();
        }
    };

    let mut entries: Vec<FavoriteEntry> = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let entry: FavoriteEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed stored favorite");
                continue;
            }
        };
        if entries.iter().any(|e| e.url() == entry.url()) {
            tracing::warn!(url = %entry.url(), "dropping duplicate stored favorite");
            continue;
        }
        entries.push(entry);
    }
    entries
}
