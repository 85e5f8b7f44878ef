//! File download operations
//!
//! Downloads land in a category directory under the file name taken from the
//! URL's last path segment. An existing file at that path is overwritten
//! unconditionally; nothing is skipped, resumed or verified.

use std::path::{Path, PathBuf};

use url::Url;

use crate::app::client::http::{HttpHandler, StatusClass};
use crate::errors::{DownloadError, DownloadResult};

/// Local path a URL downloads to inside `out_dir`
pub fn destination_for(url: &Url, out_dir: &Path) -> DownloadResult<PathBuf> {
    let file_name = url
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DownloadError::NoFileName {
            url: url.to_string(),
        })?;

    Ok(out_dir.join(file_name))
}

/// File download operations handler
pub struct DownloadHandler<'a> {
    http_handler: &'a HttpHandler,
}

impl<'a> DownloadHandler<'a> {
    /// Creates a new DownloadHandler with the given HTTP handler
    pub fn new(http_handler: &'a HttpHandler) -> Self {
        Self { http_handler }
    }

    /// Downloads `url` into `out_dir`, creating the directory on demand
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL has no file name
    /// - The HTTP request fails or the server answers with a non-success status
    /// - File I/O operations fail
    pub async fn download_to_dir(&self, url: &Url, out_dir: &Path) -> DownloadResult<PathBuf> {
        let destination = destination_for(url, out_dir)?;
        tokio::fs::create_dir_all(out_dir).await?;

        let bytes = self.download_file_content(url).await?;
        tokio::fs::write(&destination, &bytes).await?;

        tracing::debug!(
            "Wrote {} bytes to {}",
            bytes.len(),
            destination.display()
        );
        Ok(destination)
    }

    /// Download file content as bytes without saving to disk
    pub async fn download_file_content(&self, url: &Url) -> DownloadResult<Vec<u8>> {
        let response = self.http_handler.get(url).await?;

        match StatusClass::from(response.status()) {
            StatusClass::Success => {}
            StatusClass::Unauthorized => {
                return Err(DownloadError::Unauthorized {
                    url: url.to_string(),
                })
            }
            StatusClass::NotFound => {
                return Err(DownloadError::NotFound {
                    url: url.to_string(),
                })
            }
            StatusClass::Failed(status) => return Err(DownloadError::ServerError { status }),
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_uses_last_segment() {
        let url = Url::parse(
            "https://example.com/teams/flight/SOC/TS2/ead/def/ts2_def_ead_20251201_v1.0.0.cdf",
        )
        .unwrap();
        let destination = destination_for(&url, Path::new("./data/storm/ead")).unwrap();
        assert_eq!(
            destination,
            PathBuf::from("./data/storm/ead/ts2_def_ead_20251201_v1.0.0.cdf")
        );
    }

    #[test]
    fn test_destination_ignores_query() {
        let url = Url::parse("https://example.com/dir/file.cdf?token=abc").unwrap();
        let destination = destination_for(&url, Path::new("out")).unwrap();
        assert_eq!(destination, PathBuf::from("out/file.cdf"));
    }

    #[test]
    fn test_directory_url_has_no_file_name() {
        let url = Url::parse("https://example.com/dir/").unwrap();
        let result = destination_for(&url, Path::new("out"));
        assert!(matches!(result, Err(DownloadError::NoFileName { .. })));
    }
}
