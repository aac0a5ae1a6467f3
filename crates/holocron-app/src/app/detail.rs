//! Detail view model
//!
//! One item fetched on demand. A missing item and a failed fetch end in the
//! same not-found state; there is no retry.

use holocron::catalog::{detail_sections, CatalogItem, Category};

/// Heading of the not-found presentation
pub const NOT_FOUND_TITLE: &str = "Item not found";

/// Recovery affordance of the not-found presentation
pub const HOME_LABEL: &str = "Go Back Home";

/// Navigation affordance of the found presentation
pub const BACK_LABEL: &str = "← Back to List";

/// Where the detail fetch is at
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(CatalogItem),
    NotFound,
}

/// A rendered section: title and `(label, value)` rows
pub type RenderedSection = (&'static str, Vec<(&'static str, String)>);

/// The detail view for one `(category, id)`
#[derive(Debug, Clone)]
pub struct DetailView {
    category: Category,
    id: String,
    state: DetailState,
}

impl DetailView {
    /// A view waiting for its fetch
    pub fn new(category: Category, id: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
            state: DetailState::Loading,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    /// Apply the fetch outcome
    pub fn resolve(&mut self, result: Result<Option<CatalogItem>, String>) {
        self.state = match result {
            Ok(Some(item)) => DetailState::Found(item),
            Ok(None) => {
                tracing::info!(category = %self.category, id = %self.id, "item not found");
                DetailState::NotFound
            }
            Err(e) => {
                tracing::warn!(category = %self.category, id = %self.id, error = %e, "detail fetch failed");
                DetailState::NotFound
            }
        };
    }

    /// Category-specific sections of a found item
    ///
    /// Empty while loading or when not found.
    pub fn sections(&self) -> Vec<RenderedSection> {
        let DetailState::Found(item) = &self.state else {
            return Vec::new();
        };
        detail_sections(self.category)
            .iter()
            .map(|section| {
                let rows = section
                    .fields
                    .iter()
                    .map(|field| (field.label, field.render(item)))
                    .collect();
                (section.title, rows)
            })
            .collect()
    }
}
