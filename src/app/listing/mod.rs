//! Directory listing processing
//!
//! Turns the raw text of a portal directory listing into the set of files to
//! download for a date window. The steps are kept separate so each can be
//! tested on its own:
//!
//! - [`extract`] finds file names matching a category's convention
//! - [`resolve`] keeps the newest version of each day
//! - [`window`] applies the inclusive date window
//!
//! [`plan_category`] chains them for one category.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tracers_fetcher::app::catalog::ACI;
//! use tracers_fetcher::app::listing::plan_category;
//! use tracers_fetcher::app::models::{DateWindow, Satellite};
//! use url::Url;
//!
//! let listing = "ts2_l2_aci_ipd_20250101_v1.0.0.cdf ts2_l2_aci_ipd_20250101_v1.1.0.cdf";
//! let url = Url::parse("https://example.com/ACI/ts2/l2/aci/ipd/").unwrap();
//! let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let plan = plan_category(ACI, Satellite::Ts2, &url, listing, &DateWindow::new(day, day)).unwrap();
//! assert_eq!(plan.files.len(), 1);
//! assert!(plan.files[0].url.as_str().ends_with("v1.1.0.cdf"));
//! ```

pub mod extract;
pub mod resolve;
pub mod window;

pub use extract::{Extraction, ExtractionStats, FilenamePattern};
pub use resolve::{resolve_latest, unique_filenames, VersionResolver};
pub use window::{filter_window, Dated};

use tracing::{debug, info};
use url::Url;

use crate::app::catalog::Category;
use crate::app::models::{DateWindow, ResolvedFile, Satellite};
use crate::errors::{ListingError, ListingResult};

/// Files selected from one category listing
#[derive(Debug, Clone)]
pub struct CategoryPlan {
    pub category: Category,
    pub listing_url: Url,
    /// Extraction counters for the listing
    pub stats: ExtractionStats,
    /// Distinct files (versioned) or days (unversioned) before windowing
    pub listed: usize,
    /// Files to download, in listing order
    pub files: Vec<ResolvedFile>,
}

/// Select the files to download from one category's listing text
///
/// `listing_url` must be the directory the text was fetched from; file URLs
/// are resolved against it.
pub fn plan_category(
    category: Category,
    satellite: Satellite,
    listing_url: &Url,
    listing_text: &str,
    window: &DateWindow,
) -> ListingResult<CategoryPlan> {
    let pattern = category.pattern(satellite);
    let Extraction { entries, stats } = pattern.extract(listing_text);

    let candidates = if category.versioned {
        resolve_latest(entries)
    } else {
        unique_filenames(entries)
    };
    let listed = candidates.len();

    let files = filter_window(candidates, window)
        .into_iter()
        .map(|entry| {
            let url = listing_url
                .join(&entry.filename)
                .map_err(|e| ListingError::InvalidUrl {
                    category: category.name.to_string(),
                    error: e.to_string(),
                })?;
            Ok(ResolvedFile {
                date: entry.date,
                url,
                version: entry.version,
            })
        })
        .collect::<ListingResult<Vec<_>>>()?;

    if stats.skipped > 0 {
        debug!(
            "Skipped {} malformed {} names in {}",
            stats.skipped, category.name, listing_url
        );
    }
    info!(
        "{}: {} files listed, {} within {}",
        category.name,
        listed,
        files.len(),
        window
    );

    Ok(CategoryPlan {
        category,
        listing_url: listing_url.clone(),
        stats,
        listed,
        files,
    })
}
