//! Configuration constants for holocron app services

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "holocron";
}

/// File names inside the config directory
pub mod files {
    /// Settings file
    pub const SETTINGS: &str = "settings.json";

    /// Default log file written by the terminal front end
    pub const LOG: &str = "holocron.log";

    /// Extension for durable storage values (one file per key)
    pub const STORAGE_EXT: &str = "json";
}

/// Provider-related configuration
pub mod providers {
    /// Identifier of the default catalog source
    pub const SWAPI_ID: &str = "swapi";
}

/// Controller configuration
pub mod controller {
    /// Capacity of the fetch result channel
    pub const RESULT_CHANNEL_CAPACITY: usize = 16;
}
