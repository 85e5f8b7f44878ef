//! Application constants for TRACERS Fetcher
//!
//! This module centralizes the constants used throughout the application,
//! organized by functional domain.

use std::time::Duration;

/// Environment variable names for authentication
pub mod env {
    /// Environment variable name for the portal username
    pub const USERNAME: &str = "TRACERS_USERNAME";

    /// Environment variable name for the portal password
    pub const PASSWORD: &str = "TRACERS_PASSWORD";
}

/// Authentication and credential-related constants
pub mod auth {
    /// Minimum allowed username length
    pub const MIN_USERNAME_LENGTH: usize = 2;

    /// Maximum allowed username length
    pub const MAX_USERNAME_LENGTH: usize = 64;

    /// File permissions for .env file (Unix only) - owner read/write only
    #[cfg(unix)]
    pub const ENV_FILE_PERMISSIONS: u32 = 0o600;

    /// Name of the dotenv file credentials are stored in
    pub const ENV_FILE_NAME: &str = ".env";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "TRACERS-Fetcher/0.1.0 (Space Physics Research Tool)";

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
}

/// Rate limiting configuration
pub mod limits {
    /// Default rate limit for portal requests (requests per second)
    pub const DEFAULT_RATE_LIMIT_RPS: u32 = 10;
}

/// TRACERS science portal URLs
pub mod portal {
    /// Flight team area of the TRACERS portal; category paths are joined onto this
    pub const BASE_URL: &str = "https://tracers-portal.physics.uiowa.edu/teams/flight/";
}

/// Local directory layout
pub mod layout {
    /// Root under which `<run>/<category>/` download directories are created
    pub const DATA_ROOT: &str = "./data";

    /// Directory case files are written to
    pub const CASE_DIR: &str = "case_files";

    /// Root for plot and event outputs named in case files
    pub const OUTPUT_ROOT: &str = "output";

    /// Extension shared by every instrument data file
    pub const DATA_EXTENSION: &str = "cdf";

    /// File name prefix of auxiliary OMNIWeb files
    pub const OMNIWEB_PREFIX: &str = "omni";
}

/// Configuration file discovery
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "tracers-fetcher.toml";

    /// Directory under the user config dir holding `config.toml`
    pub const APP_DIR_NAME: &str = "tracers-fetcher";
}

// Re-export commonly used constants for convenience
pub use env::{PASSWORD as ENV_PASSWORD, USERNAME as ENV_USERNAME};
pub use http::USER_AGENT;
pub use limits::DEFAULT_RATE_LIMIT_RPS;
pub use portal::BASE_URL as PORTAL_BASE_URL;
