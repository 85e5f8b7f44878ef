//! Acquisition run orchestration
//!
//! For each requested category: fetch the listing, plan the downloads for the
//! date window, then download the files one after another into
//! `<data_root>/<run>/<category>/`. The first failure aborts the run; files
//! already written stay on disk.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::catalog::Category;
use crate::app::client::{destination_for, PortalClient};
use crate::app::listing::{plan_category, ExtractionStats};
use crate::app::models::{DateWindow, Satellite};
use crate::errors::Result;

/// What to fetch and where to put it
#[derive(Debug, Clone)]
pub struct AcquisitionRequest {
    pub satellite: Satellite,
    pub window: DateWindow,
    pub run_name: String,
    pub categories: Vec<Category>,
    pub data_root: PathBuf,
    /// Plan only; report destinations without downloading
    pub dry_run: bool,
}

/// Progress notifications emitted during a run
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Listing planned, downloads about to start
    CategoryStarted { category: Category, total: usize },
    /// One file written (or, in a dry run, would be written)
    FileCompleted { category: Category, path: PathBuf },
    /// All files of the category handled
    CategoryFinished { category: Category },
}

/// Outcome for one category
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: Category,
    pub local_dir: PathBuf,
    pub stats: ExtractionStats,
    /// Distinct files before the date window was applied
    pub listed: usize,
    /// Files inside the date window
    pub selected: usize,
    /// Paths written, or the planned destinations in a dry run
    pub files: Vec<PathBuf>,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default)]
pub struct AcquisitionReport {
    pub dry_run: bool,
    pub categories: Vec<CategoryReport>,
}

impl AcquisitionReport {
    /// Files downloaded (or planned) across every category
    pub fn total_files(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }
}

/// Runs acquisitions against one portal client
pub struct Acquisition<'a> {
    client: &'a PortalClient,
}

impl<'a> Acquisition<'a> {
    pub fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Execute `request`, reporting progress through `on_progress`
    ///
    /// # Errors
    ///
    /// Returns the first listing or download failure
    pub async fn run<F>(
        &self,
        request: &AcquisitionRequest,
        mut on_progress: F,
    ) -> Result<AcquisitionReport>
    where
        F: FnMut(ProgressEvent),
    {
        info!(
            "Acquiring {} data for run '{}' within {}",
            request.satellite, request.run_name, request.window
        );

        let mut report = AcquisitionReport {
            dry_run: request.dry_run,
            categories: Vec::with_capacity(request.categories.len()),
        };

        for category in &request.categories {
            let category_report = self.run_category(*category, request, &mut on_progress).await?;
            report.categories.push(category_report);
        }

        info!(
            "Run '{}' finished with {} files",
            request.run_name,
            report.total_files()
        );
        Ok(report)
    }

    async fn run_category<F>(
        &self,
        category: Category,
        request: &AcquisitionRequest,
        on_progress: &mut F,
    ) -> Result<CategoryReport>
    where
        F: FnMut(ProgressEvent),
    {
        let listing_url = category.listing_url(self.client.base_url(), request.satellite)?;
        debug!("Fetching {} listing from {}", category.name, listing_url);

        let listing = self.client.fetch_listing(&listing_url).await?;
        let plan = plan_category(
            category,
            request.satellite,
            &listing_url,
            &listing,
            &request.window,
        )?;

        let local_dir = category.local_dir(&request.data_root, &request.run_name);
        on_progress(ProgressEvent::CategoryStarted {
            category,
            total: plan.files.len(),
        });

        let mut files = Vec::with_capacity(plan.files.len());
        for file in &plan.files {
            let path = if request.dry_run {
                destination_for(&file.url, &local_dir)?
            } else {
                debug!(
                    "Downloading {} for {} ({})",
                    file.file_name().unwrap_or(file.url.as_str()),
                    file.date,
                    file.version
                );
                self.client.download_file(&file.url, &local_dir).await?
            };
            on_progress(ProgressEvent::FileCompleted {
                category,
                path: path.clone(),
            });
            files.push(path);
        }

        on_progress(ProgressEvent::CategoryFinished { category });

        Ok(CategoryReport {
            category,
            local_dir,
            stats: plan.stats,
            listed: plan.listed,
            selected: plan.files.len(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::ACI;
    use std::path::Path;

    #[test]
    fn test_report_totals() {
        let category_report = |n: usize| CategoryReport {
            category: ACI,
            local_dir: PathBuf::from("./data/run/aci"),
            stats: ExtractionStats::default(),
            listed: n,
            selected: n,
            files: (0..n)
                .map(|i| Path::new("./data/run/aci").join(format!("{}.cdf", i)))
                .collect(),
        };

        let report = AcquisitionReport {
            dry_run: false,
            categories: vec![category_report(2), category_report(3)],
        };
        assert_eq!(report.total_files(), 5);
        assert_eq!(AcquisitionReport::default().total_files(), 0);
    }
}
