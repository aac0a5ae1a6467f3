//! Data persistence
//!
//! Handles durable storage, favorites, and settings.

pub mod favorites;
pub mod settings;
pub mod storage;

// Re-export common types
pub use favorites::{FavoritesStore, Toggle};
pub use settings::Settings;
pub use storage::{config_dir, data_path, DurableStorage, FileStorage, MemoryStorage};
