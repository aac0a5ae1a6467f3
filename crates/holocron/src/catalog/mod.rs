//! Catalog data model
//!
//! Categories, fetched items, favorite entries, and the per-category
//! field sets used to present them.

pub mod fields;
pub mod types;

pub use fields::{card_summary, detail_sections, FieldSpec, Section};
pub use types::{item_id, CatalogItem, Category, FavoriteEntry};
