//! Core application logic for TRACERS Fetcher
//!
//! This module contains the portal client, the category registry, listing
//! processing, acquisition orchestration and the case file builder.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tracers_fetcher::app::{
//!     Acquisition, AcquisitionRequest, ClientConfig, DateWindow, PortalClient, Satellite,
//!     DEFAULT_DOWNLOADS,
//! };
//! use tracers_fetcher::auth::Credentials;
//! use chrono::NaiveDate;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PortalClient::new(
//!     Credentials::resolve(None, None)?,
//!     Url::parse("https://tracers-portal.physics.uiowa.edu/teams/flight/")?,
//!     &ClientConfig::default(),
//! )?;
//!
//! let request = AcquisitionRequest {
//!     satellite: Satellite::Ts2,
//!     window: DateWindow::new(
//!         NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
//!     ),
//!     run_name: "december_storm".to_string(),
//!     categories: DEFAULT_DOWNLOADS.to_vec(),
//!     data_root: "./data".into(),
//!     dry_run: false,
//! };
//!
//! let report = Acquisition::new(&client).run(&request, |_| {}).await?;
//! println!("Downloaded {} files", report.total_files());
//! # Ok(())
//! # }
//! ```

pub mod acquisition;
pub mod case_file;
pub mod catalog;
pub mod client;
pub mod listing;
pub mod models;

// Re-export main public API
pub use acquisition::{
    Acquisition, AcquisitionReport, AcquisitionRequest, CategoryReport, ProgressEvent,
};
pub use case_file::{CaseFile, CaseFileBuilder, CaseFileRequest, Layout};
pub use catalog::{Category, CATEGORIES, DEFAULT_DOWNLOADS};
pub use client::{ClientConfig, PortalClient};
pub use listing::{plan_category, CategoryPlan, ExtractionStats, FilenamePattern};
pub use models::{DateWindow, RemoteEntry, ResolvedFile, Satellite, Version};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Ensure public API is accessible
        let config = ClientConfig::default();
        assert!(config.tcp_nodelay);
        assert_eq!(DEFAULT_DOWNLOADS.len(), 2);
    }
}
