//! Catalog source trait
//!
//! Defines the interface the views use to fetch catalog data.

use holocron::catalog::{CatalogItem, Category};

use crate::error::Result;

/// A read-only source of catalog items
///
/// Implementations must be shareable across fetch threads.
pub trait CatalogSource: Send + Sync {
    /// Machine-readable identifier (e.g., "swapi")
    fn id(&self) -> &'static str;

    /// List the items of one category
    fn list_category(&self, category: Category) -> Result<Vec<CatalogItem>>;

    /// Look up a single item by its identifier
    ///
    /// `Ok(None)` means the source answered but has no such item.
    fn get_item(&self, category: Category, id: &str) -> Result<Option<CatalogItem>>;
}
