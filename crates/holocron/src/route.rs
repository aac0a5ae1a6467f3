//! Navigation routes
//!
//! Maps an in-app path to the view that renders it. `/detail/{category}/{id}`
//! selects the detail view; every other path selects the list.

use crate::catalog::{CatalogItem, Category};
use crate::config::route::DETAIL_SEGMENT;

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The catalog list (all items or favorites)
    List,
    /// A single item, fetched on demand
    Detail { category: Category, id: String },
}

impl Route {
    /// Create a detail route
    pub fn detail(category: Category, id: impl Into<String>) -> Self {
        Route::Detail {
            category,
            id: id.into(),
        }
    }

    /// Route to an item's detail view
    ///
    /// Returns `None` if the item URL has no usable identifier.
    pub fn detail_for(item: &CatalogItem, category: Category) -> Option<Self> {
        item.id().map(|id| Route::detail(category, id))
    }

    /// Parse a navigation path
    ///
    /// Empty segments are ignored, so a trailing slash is accepted. Unknown
    /// categories and any other shape fall back to the list.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [DETAIL_SEGMENT, category, id] => match category.parse::<Category>() {
                Ok(category) => Route::detail(category, *id),
                Err(_) => Route::List,
            },
            _ => Route::List,
        }
    }

    /// Path for this route
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { category, id } => format!("/{DETAIL_SEGMENT}/{category}/{id}"),
        }
    }

    /// Whether this is the list route
    pub fn is_list(&self) -> bool {
        matches!(self, Route::List)
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::List
    }
}
