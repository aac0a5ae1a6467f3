//! Configuration constants for the holocron core

/// Remote catalog configuration
pub mod api {
    /// Default reference API server
    pub const DEFAULT_BASE_URL: &str = "https://swapi.dev";

    /// Path prefix shared by every catalog endpoint
    pub const PATH_PREFIX: &str = "/api";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Holocron/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Durable storage configuration
pub mod storage {
    /// Key under which the favorites array is persisted
    pub const FAVORITES_KEY: &str = "starwars-favorites";
}

/// Navigation configuration
pub mod route {
    /// First path segment that selects the detail view
    pub const DETAIL_SEGMENT: &str = "detail";
}
