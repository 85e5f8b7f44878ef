//! HTTP client for the TRACERS science portal
//!
//! The portal serves plain directory listings behind HTTP Basic Auth. The
//! client fetches listings as text and downloads individual files.
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: authenticated GET with optional rate limiting
//! - `download`: writing downloaded files into category directories

use std::path::{Path, PathBuf};

use url::Url;

use crate::auth::Credentials;
use crate::errors::{AuthError, AuthResult, DownloadResult, ListingError, ListingResult};

pub mod config;
pub mod download;
pub mod http;

pub use config::ClientConfig;
pub use download::destination_for;

use download::DownloadHandler;
use http::{HttpHandler, StatusClass};

/// Authenticated client for the TRACERS portal
#[derive(Debug)]
pub struct PortalClient {
    http_handler: HttpHandler,
    base_url: Url,
}

impl PortalClient {
    /// Creates a client for `base_url` that authenticates as `credentials`
    ///
    /// No request is made; use [`PortalClient::verify`] to check the
    /// credentials up front.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the HTTP client cannot be built
    pub fn new(credentials: Credentials, base_url: Url, config: &ClientConfig) -> AuthResult<Self> {
        let client = config.build_http_client()?;
        let http_handler = HttpHandler::new(client, credentials, config.rate_limit_rps);

        tracing::info!(
            "Created portal client for {} as {}",
            base_url,
            http_handler.username()
        );

        Ok(Self {
            http_handler,
            base_url,
        })
    }

    /// Fetches a directory listing as raw text
    ///
    /// # Errors
    ///
    /// Returns `ListingError` on transport failure or a non-success status
    pub async fn fetch_listing(&self, url: &Url) -> ListingResult<String> {
        let http_error = |source| ListingError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.http_handler.get(url).await.map_err(http_error)?;

        match StatusClass::from(response.status()) {
            StatusClass::Success => {}
            StatusClass::Unauthorized => {
                return Err(ListingError::Unauthorized {
                    url: url.to_string(),
                })
            }
            StatusClass::NotFound => {
                return Err(ListingError::NotFound {
                    url: url.to_string(),
                })
            }
            StatusClass::Failed(status) => {
                return Err(ListingError::ServerError {
                    url: url.to_string(),
                    status,
                })
            }
        }

        let text = response.text().await.map_err(http_error)?;
        tracing::debug!("Fetched listing {} ({} bytes)", url, text.len());
        Ok(text)
    }

    /// Downloads a file into `out_dir`, overwriting any existing copy
    ///
    /// Returns the local path written.
    pub async fn download_file(&self, url: &Url, out_dir: &Path) -> DownloadResult<PathBuf> {
        DownloadHandler::new(&self.http_handler)
            .download_to_dir(url, out_dir)
            .await
    }

    /// Checks the credentials against the portal base URL
    ///
    /// Returns `Ok(false)` when the portal rejects them.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the portal cannot be reached
    pub async fn verify(&self) -> AuthResult<bool> {
        let response = self.http_handler.get(&self.base_url).await?;
        let status = response.status();

        match StatusClass::from(status) {
            StatusClass::Unauthorized => {
                tracing::warn!(
                    "Portal rejected credentials for {}",
                    self.http_handler.username()
                );
                Ok(false)
            }
            StatusClass::Success => Ok(true),
            StatusClass::NotFound | StatusClass::Failed(_) => {
                tracing::warn!("Unexpected status {} verifying credentials", status);
                Err(AuthError::UnexpectedStatus {
                    status: status.as_u16(),
                })
            }
        }
    }

    /// Get the portal base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
