//! Catalog sources
//!
//! Sources of catalog listings and item details (SWAPI, test doubles).

pub mod swapi;
pub mod traits;

// Re-exports
pub use swapi::SwapiSource;
pub use traits::CatalogSource;
