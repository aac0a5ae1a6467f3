//! Shared application state and commands
//!
//! `AppCommand` is the unified command type handled by the controller, both
//! for user actions and for fetch results coming back from worker threads.

use holocron::catalog::{CatalogItem, Category};
use holocron::route::Route;

/// Which items the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Every fetched item across the three categories
    #[default]
    All,
    /// Only the favorites store contents
    Favorites,
}

impl ViewState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            ViewState::All => ViewState::Favorites,
            ViewState::Favorites => ViewState::All,
        }
    }
}

/// Loading state of one category listing
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<CatalogItem>),
    /// The fetch failed; the category renders no items
    Failed(String),
}

impl LoadState {
    /// Items to render (empty unless loaded)
    pub fn items(&self) -> &[CatalogItem] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

/// Commands handled by the controller
#[derive(Debug)]
pub enum AppCommand {
    // Navigation
    Navigate(Route),
    Home,
    SetView(ViewState),

    // Favorites
    ToggleFavorite {
        item: CatalogItem,
        category: Category,
    },

    // Refetch every category listing
    Reload,

    // Internal: listing fetched on a worker thread (not sent by frontends)
    InternalCategoryLoaded {
        generation: u64,
        category: Category,
        result: Result<Vec<CatalogItem>, String>,
    },

    // Internal: detail fetched on a worker thread (not sent by frontends)
    InternalDetailLoaded {
        generation: u64,
        result: Result<Option<CatalogItem>, String>,
    },
}
