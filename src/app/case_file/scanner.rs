//! Local file discovery for case files
//!
//! Instrument files are matched directly inside their category directory and
//! listed in sorted order. Auxiliary OMNIWeb files are matched at any depth
//! under the run directory and kept in the order the walk yields them.
//! Symbolic links are followed, so linked files and directories count like
//! regular ones.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::app::catalog::Category;
use crate::app::models::Satellite;
use crate::constants::layout;

/// File name filter plus walk behaviour for one group of case file inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPattern {
    prefix: String,
    suffix: String,
    recursive: bool,
    sorted: bool,
}

impl ScanPattern {
    /// Files named `<stem>_*.cdf` directly inside a category directory, sorted
    pub fn instrument(category: &Category, satellite: Satellite) -> Self {
        Self {
            prefix: format!("{}_", category.file_stem(satellite)),
            suffix: format!(".{}", layout::DATA_EXTENSION),
            recursive: false,
            sorted: true,
        }
    }

    /// `omni*.cdf` at any depth, in walk order
    pub fn omniweb() -> Self {
        Self {
            prefix: layout::OMNIWEB_PREFIX.to_string(),
            suffix: format!(".{}", layout::DATA_EXTENSION),
            recursive: true,
            sorted: false,
        }
    }

    /// Whether a bare file name matches
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + self.suffix.len()
            && file_name.starts_with(&self.prefix)
            && file_name.ends_with(&self.suffix)
    }

    /// Matching files under `dir`; a missing directory yields an empty list
    pub fn scan(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut found: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| self.matches(name))
            })
            .map(|entry| entry.into_path())
            .collect();

        if self.sorted {
            found.sort();
        }

        debug!(
            "Found {} files matching {}*{} under {}",
            found.len(),
            self.prefix,
            self.suffix,
            dir.display()
        );
        found
    }
}
