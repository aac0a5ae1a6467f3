//! Application controller
//!
//! Owns the favorites store and the view models, and processes commands
//! from the frontend and fetch results from worker threads through a single
//! crossbeam channel. All state changes happen on the thread that calls
//! [`AppController::handle`] / [`AppController::poll`].

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use holocron::catalog::{CatalogItem, Category};
use holocron::route::Route;

use crate::config::controller::RESULT_CHANNEL_CAPACITY;
use crate::data::{FavoritesStore, Toggle};
use crate::providers::CatalogSource;

use super::detail::DetailView;
use super::list::{Card, ListView};
use super::state::{AppCommand, LoadState, ViewState};

pub struct AppController {
    source: Arc<dyn CatalogSource>,
    favorites: FavoritesStore,
    route: Route,
    view: ViewState,
    list: ListView,
    /// Present while the detail route is active
    detail: Option<DetailView>,
    /// Monotonically increasing counters to discard stale fetch results
    list_generation: u64,
    detail_generation: u64,
    result_tx: Sender<AppCommand>,
    result_rx: Receiver<AppCommand>,
}

impl AppController {
    /// Create a controller; nothing is fetched until [`AppController::start`]
    pub fn new(source: Arc<dyn CatalogSource>, favorites: FavoritesStore) -> Self {
        let (result_tx, result_rx) = crossbeam_channel::bounded(RESULT_CHANNEL_CAPACITY);
        Self {
            source,
            favorites,
            route: Route::List,
            view: ViewState::default(),
            list: ListView::new(),
            detail: None,
            list_generation: 0,
            detail_generation: 0,
            result_tx,
            result_rx,
        }
    }

    /// Enter the initial route and issue its fetches
    pub fn start(&mut self, route: Route) {
        tracing::info!(source = self.source.id(), path = %route.path(), "starting");
        self.route = route.clone();
        self.enter(route);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Cards of the list view in its current state
    ///
    /// Empty while the page-level loading indicator is shown.
    pub fn cards(&self) -> Vec<Card<'_>> {
        if self.list.is_page_loading() {
            return Vec::new();
        }
        self.list.cards(self.view, &self.favorites)
    }

    // -------------------------------------------------------------------------
    // Command processing
    // -------------------------------------------------------------------------

    /// Handle a single command
    pub fn handle(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Navigate(route) => self.navigate(route),
            AppCommand::Home => self.navigate(Route::List),
            AppCommand::SetView(view) => {
                self.view = view;
            }
            AppCommand::ToggleFavorite { item, category } => {
                self.toggle_favorite(&item, category);
            }
            AppCommand::Reload => self.reload(),
            AppCommand::InternalCategoryLoaded {
                generation,
                category,
                result,
            } => self.handle_category_loaded(generation, category, result),
            AppCommand::InternalDetailLoaded { generation, result } => {
                self.handle_detail_loaded(generation, result)
            }
        }
    }

    /// Toggle an item in the favorites store
    pub fn toggle_favorite(&mut self, item: &CatalogItem, category: Category) -> Toggle {
        let outcome = self.favorites.toggle(item, category);
        tracing::debug!(url = %item.url, ?outcome, "favorite toggled");
        outcome
    }

    /// Apply every fetch result that has arrived. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(cmd) = self.result_rx.try_recv() {
            self.handle(cmd);
            applied += 1;
        }
        applied
    }

    /// Block until one fetch result arrives or the timeout expires
    ///
    /// Returns true if a result was applied.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        match self.result_rx.recv_timeout(timeout) {
            Ok(cmd) => {
                self.handle(cmd);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            // Unreachable while we hold a sender
            Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = %self.route.path(), to = %route.path(), "navigate");
        self.leave();
        self.route = route.clone();
        self.enter(route);
    }

    /// Cancel the fetches of the route being left
    fn leave(&mut self) {
        match self.route {
            Route::List => {
                if Category::ALL.iter().any(|c| self.list.state(*c).is_loading()) {
                    self.list_generation += 1;
                }
            }
            Route::Detail { .. } => {
                self.detail_generation += 1;
                self.detail = None;
            }
        }
    }

    fn enter(&mut self, route: Route) {
        match route {
            Route::List => {
                for category in self.list.pending() {
                    self.fetch_category(category);
                }
            }
            Route::Detail { category, id } => {
                self.detail_generation += 1;
                self.detail = Some(DetailView::new(category, id.clone()));
                self.fetch_detail(category, id);
            }
        }
    }

    fn reload(&mut self) {
        if !self.route.is_list() {
            return;
        }
        self.list_generation += 1;
        for category in Category::ALL {
            self.fetch_category(category);
        }
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Fetch one listing on a worker thread
    ///
    /// The result is tagged with the current `list_generation`; results from
    /// earlier generations are discarded in `handle_category_loaded`.
    fn fetch_category(&mut self, category: Category) {
        self.list.set(category, LoadState::Loading);
        let generation = self.list_generation;
        let source = Arc::clone(&self.source);
        let tx = self.result_tx.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("fetch-{category}"))
            .spawn(move || {
                let result = source.list_category(category).map_err(|e| e.to_string());
                let _ = tx.send(AppCommand::InternalCategoryLoaded {
                    generation,
                    category,
                    result,
                });
            });

        if let Err(e) = spawned {
            tracing::error!(%category, error = %e, "failed to spawn fetch thread");
            self.list.set(category, LoadState::Failed(e.to_string()));
        }
    }

    /// Fetch one item on a worker thread, tagged with `detail_generation`
    fn fetch_detail(&mut self, category: Category, id: String) {
        let generation = self.detail_generation;
        let source = Arc::clone(&self.source);
        let tx = self.result_tx.clone();

        let spawned = std::thread::Builder::new()
            .name("fetch-detail".into())
            .spawn(move || {
                let result = source.get_item(category, &id).map_err(|e| e.to_string());
                let _ = tx.send(AppCommand::InternalDetailLoaded { generation, result });
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn fetch thread");
            if let Some(detail) = self.detail.as_mut() {
                detail.resolve(Err(e.to_string()));
            }
        }
    }

    fn handle_category_loaded(
        &mut self,
        generation: u64,
        category: Category,
        result: Result<Vec<CatalogItem>, String>,
    ) {
        if generation != self.list_generation {
            tracing::debug!(%category, generation, "discarding stale listing");
            return;
        }
        let state = match result {
            Ok(items) => {
                tracing::info!(%category, count = items.len(), "listing loaded");
                LoadState::Loaded(items)
            }
            Err(e) => {
                tracing::warn!(%category, error = %e, "listing fetch failed");
                LoadState::Failed(e)
            }
        };
        self.list.set(category, state);
    }

    fn handle_detail_loaded(&mut self, generation: u64, result: Result<Option<CatalogItem>, String>) {
        if generation != self.detail_generation {
            tracing::debug!(generation, "discarding stale detail");
            return;
        }
        if let Some(detail) = self.detail.as_mut() {
            detail.resolve(result);
        }
    }
}
