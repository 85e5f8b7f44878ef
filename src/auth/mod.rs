//! Authentication management for TRACERS portal credentials
//!
//! This module resolves the Basic Auth credentials used for every portal
//! request and provides interactive setup, verification and storage in
//! `.env` files.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tracers_fetcher::auth::Credentials;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Flag values win; missing ones fall back to TRACERS_USERNAME / TRACERS_PASSWORD
//! let credentials = Credentials::resolve(Some("jdoe".to_string()), None)?;
//! println!("Authenticating as {}", credentials.username);
//! # Ok(())
//! # }
//! ```

pub mod credentials;

pub use credentials::{
    get_auth_status, prompt_credentials, save_credentials, setup_credentials, show_auth_status,
    verify_credentials, AuthStatus, Credentials,
};
