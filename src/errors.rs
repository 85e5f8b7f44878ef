//! Error types for TRACERS Fetcher
//!
//! This module defines the error types for all components of the application.
//! Errors are designed to be actionable and provide clear context for debugging and
//! user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No username/password supplied on the command line or in the environment
    #[error(
        "Missing TRACERS portal credentials. Pass --username/--password, set TRACERS_USERNAME and TRACERS_PASSWORD, or run 'auth setup'"
    )]
    MissingCredentials,

    /// HTTP request failed while checking credentials
    #[error("HTTP request failed during authentication")]
    Http(#[from] reqwest::Error),

    /// Portal rejected the supplied credentials
    #[error("TRACERS portal rejected the credentials for user {username}")]
    Rejected { username: String },

    /// Portal answered the credential check with an unexpected status
    #[error("Unexpected HTTP {status} while checking credentials")]
    UnexpectedStatus { status: u16 },

    /// Invalid username format
    #[error("Invalid username format: {reason}")]
    InvalidUsername { reason: String },

    /// File I/O error during credential storage
    #[error("Failed to save credentials to file")]
    CredentialStorage(#[from] std::io::Error),
}

/// Directory listing errors
#[derive(Error, Debug)]
pub enum ListingError {
    /// HTTP request failed while fetching a listing
    #[error("Failed to fetch directory listing {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Portal refused the credentials
    #[error("Portal refused access to directory listing {url}. Check your credentials")]
    Unauthorized { url: String },

    /// Listing directory does not exist on the portal
    #[error("Directory listing not found: {url}")]
    NotFound { url: String },

    /// Server returned error status
    #[error("Directory listing {url} returned HTTP {status}")]
    ServerError { url: String, status: u16 },

    /// Listing URL could not be built for a category
    #[error("Invalid listing URL for category {category}: {error}")]
    InvalidUrl { category: String, error: String },

    /// Category name not present in the registry
    #[error("Unknown data category: {name}. Known categories: {known}")]
    UnknownCategory { name: String, known: String },
}

/// Download and HTTP client errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request error
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// I/O error during file operations
    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    /// URL has no final path segment to name the local file after
    #[error("URL has no file name: {url}")]
    NoFileName { url: String },

    /// Portal refused the credentials
    #[error("Portal refused access to {url}. Check your credentials")]
    Unauthorized { url: String },

    /// File not found on server
    #[error("File not found: {url}")]
    NotFound { url: String },

    /// Server returned error status
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },
}

/// Case file assembly errors
#[derive(Error, Debug)]
pub enum CaseFileError {
    /// Satellite argument outside the supported set
    #[error("Satellite argument must be either TS1 or TS2, got '{value}'")]
    InvalidSatellite { value: String },

    /// Run name was empty
    #[error("Run name must not be empty")]
    EmptyRunName,

    /// JSON serialization error
    #[error("JSON error in case file")]
    Json(#[from] serde_json::Error),

    /// I/O error writing the case file or output directories
    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error reading a case file back
    #[error("Failed to read case file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Authentication error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Directory listing error
    #[error(transparent)]
    Listing(#[from] ListingError),

    /// Download error
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Case file error
    #[error(transparent)]
    CaseFile(#[from] CaseFileError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Check if the error is likely transient
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Download(DownloadError::Http(_))
                | AppError::Download(DownloadError::ServerError { .. })
                | AppError::Listing(ListingError::Http { .. })
                | AppError::Listing(ListingError::ServerError { .. })
                | AppError::Auth(AuthError::Http(_))
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "authentication",
            AppError::Listing(_) => "listing",
            AppError::Download(_) => "download",
            AppError::CaseFile(_) => "case-file",
            AppError::Config(_) => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Authentication result type alias
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Listing result type alias
pub type ListingResult<T> = std::result::Result<T, ListingError>;

/// Download result type alias
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

/// Case file result type alias
pub type CaseFileResult<T> = std::result::Result<T, CaseFileError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = AppError::from(CaseFileError::InvalidSatellite {
            value: "TS3".to_string(),
        });
        assert_eq!(err.category(), "case-file");
        assert!(!err.is_recoverable());

        let err = AppError::from(DownloadError::ServerError { status: 502 });
        assert_eq!(err.category(), "download");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_satellite_message() {
        let err = CaseFileError::InvalidSatellite {
            value: "ts3".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("TS1 or TS2"));
        assert!(message.contains("ts3"));
    }
}
