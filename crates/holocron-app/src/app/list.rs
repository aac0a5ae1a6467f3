//! List view model
//!
//! Holds the three category listings and produces the cards to render for
//! the current view state.

use holocron::catalog::{card_summary, CatalogItem, Category};
use holocron::route::Route;

use crate::data::FavoritesStore;

use super::state::{LoadState, ViewState};

/// Shown by the favorites view when the store is empty
pub const NO_FAVORITES_TITLE: &str = "No favorites selected";

/// Hint shown under [`NO_FAVORITES_TITLE`]
pub const NO_FAVORITES_HINT: &str =
    "Go back to \"All\" and press the favorite key on an item to add it!";

/// A rendered list item
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    pub item: &'a CatalogItem,
    pub category: Category,
    /// Pressed state of the toggle affordance
    pub is_favorite: bool,
}

impl Card<'_> {
    /// One-line category-specific summary
    pub fn summary(&self) -> String {
        card_summary(self.item, self.category)
    }

    /// Label of the toggle affordance
    pub fn toggle_label(&self) -> &'static str {
        if self.is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }

    /// Route to this item's detail view
    pub fn detail_route(&self) -> Option<Route> {
        Route::detail_for(self.item, self.category)
    }
}

/// Category listings, each loading independently
#[derive(Debug, Clone)]
pub struct ListView {
    categories: [LoadState; 3],
    /// Cleared once every category has settled for the first time
    page_loading: bool,
}

impl ListView {
    /// All categories loading
    pub fn new() -> Self {
        Self {
            categories: [LoadState::Loading, LoadState::Loading, LoadState::Loading],
            page_loading: true,
        }
    }

    /// State of one category
    pub fn state(&self, category: Category) -> &LoadState {
        &self.categories[category.index()]
    }

    /// Replace the state of one category
    pub fn set(&mut self, category: Category, state: LoadState) {
        self.categories[category.index()] = state;
        if self.page_loading && !self.categories.iter().any(LoadState::is_loading) {
            self.page_loading = false;
        }
    }

    /// Whether the full-page loading indicator is shown
    ///
    /// True until the slowest of the initial three fetches settles. Later
    /// reloads show per-category loading instead.
    pub fn is_page_loading(&self) -> bool {
        self.page_loading
    }

    /// Loaded items of one category
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        self.state(category).items()
    }

    /// Categories whose last fetch failed
    pub fn failed(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| matches!(self.state(*c), LoadState::Failed(_)))
            .collect()
    }

    /// Categories that still need a fetch (not loaded yet)
    pub fn pending(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.state(*c).is_loaded())
            .collect()
    }

    /// Cards for the given view state
    ///
    /// `All` renders every loaded item, people then vehicles then planets.
    /// `Favorites` renders the store contents as they are right now.
    pub fn cards<'a>(&'a self, view: ViewState, favorites: &'a FavoritesStore) -> Vec<Card<'a>> {
        match view {
            ViewState::All => {
                let mut cards = Vec::new();
                for category in Category::ALL {
                    for item in self.items(category) {
                        cards.push(Card {
                            item,
                            category,
                            is_favorite: favorites.contains(item),
                        });
                    }
                }
                cards
            }
            ViewState::Favorites => favorites
                .entries()
                .iter()
                .map(|entry| Card {
                    item: &entry.item,
                    category: entry.category,
                    is_favorite: favorites.contains(&entry.item),
                })
                .collect(),
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStorage;

    fn luke() -> CatalogItem {
        CatalogItem::new("https://swapi.dev/api/people/1/", "Luke Skywalker")
            .with_field("gender", "male")
            .with_field("birth_year", "19BBY")
    }

    fn crawler() -> CatalogItem {
        CatalogItem::new("https://swapi.dev/api/vehicles/4/", "Sand Crawler")
    }

    fn tatooine() -> CatalogItem {
        CatalogItem::new("https://swapi.dev/api/planets/1/", "Tatooine")
    }

    fn loaded_list() -> ListView {
        let mut list = ListView::new();
        list.set(Category::Planets, LoadState::Loaded(vec![tatooine()]));
        list.set(Category::People, LoadState::Loaded(vec![luke()]));
        list.set(Category::Vehicles, LoadState::Loaded(vec![crawler()]));
        list
    }

    fn empty_favorites() -> FavoritesStore {
        FavoritesStore::load(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_page_loading_until_all_settle() {
        let mut list = ListView::new();
        assert!(list.is_page_loading());

        list.set(Category::Planets, LoadState::Loaded(vec![tatooine()]));
        assert!(list.is_page_loading());
        list.set(Category::People, LoadState::Failed("offline".to_string()));
        assert!(list.is_page_loading());
        list.set(Category::Vehicles, LoadState::Loaded(vec![]));
        assert!(!list.is_page_loading());

        // A later reload does not bring the page spinner back
        list.set(Category::People, LoadState::Loading);
        assert!(!list.is_page_loading());
    }

    #[test]
    fn test_all_view_orders_by_category() {
        let list = loaded_list();
        let favorites = empty_favorites();
        let cards = list.cards(ViewState::All, &favorites);

        let names: Vec<&str> = cards.iter().map(|c| c.item.name.as_str()).collect();
        assert_eq!(names, vec!["Luke Skywalker", "Sand Crawler", "Tatooine"]);
        assert_eq!(cards[0].category, Category::People);
        assert_eq!(cards[2].category, Category::Planets);
        assert!(cards.iter().all(|c| !c.is_favorite));
    }

    #[test]
    fn test_failed_category_renders_nothing() {
        let mut list = ListView::new();
        list.set(Category::People, LoadState::Loaded(vec![luke()]));
        list.set(Category::Vehicles, LoadState::Failed("timeout".to_string()));

        let favorites = empty_favorites();
        let cards = list.cards(ViewState::All, &favorites);
        assert_eq!(cards.len(), 1);
        assert_eq!(list.failed(), vec![Category::Vehicles]);
        assert_eq!(list.pending(), vec![Category::Vehicles, Category::Planets]);
    }

    #[test]
    fn test_pressed_state_follows_store() {
        let list = loaded_list();
        let mut favorites = empty_favorites();
        favorites.toggle(&crawler(), Category::Vehicles);

        let cards = list.cards(ViewState::All, &favorites);
        assert!(!cards[0].is_favorite);
        assert!(cards[1].is_favorite);
        assert_eq!(cards[1].toggle_label(), "Remove from favorites");
        assert_eq!(cards[0].toggle_label(), "Add to favorites");
    }

    #[test]
    fn test_favorites_view_equals_store() {
        let list = loaded_list();
        let mut favorites = empty_favorites();
        favorites.toggle(&tatooine(), Category::Planets);
        favorites.toggle(&luke(), Category::People);

        let urls: Vec<String> = list
            .cards(ViewState::Favorites, &favorites)
            .iter()
            .map(|c| c.item.url.clone())
            .collect();
        let stored: Vec<String> = favorites.entries().iter().map(|e| e.url().to_string()).collect();
        assert_eq!(urls, stored);

        // Toggling while in the favorites view removes the card right away
        favorites.toggle(&tatooine(), Category::Planets);
        let cards = list.cards(ViewState::Favorites, &favorites);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].item.name, "Luke Skywalker");
        assert!(cards[0].is_favorite);
    }

    #[test]
    fn test_favorites_view_works_without_listings() {
        let list = ListView::new();
        let mut favorites = empty_favorites();
        favorites.toggle(&tatooine(), Category::Planets);

        let cards = list.cards(ViewState::Favorites, &favorites);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].category, Category::Planets);
        assert_eq!(cards[0].summary(), "Population: unknown");
    }

    #[test]
    fn test_card_detail_route() {
        let list = loaded_list();
        let favorites = empty_favorites();
        let cards = list.cards(ViewState::All, &favorites);
        assert_eq!(
            cards[0].detail_route(),
            Some(Route::detail(Category::People, "1"))
        );
        assert_eq!(cards[0].summary(), "Gender: male | Birth Year: 19BBY");
    }
}
