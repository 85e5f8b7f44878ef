//! Case file builder
//!
//! A case file is the JSON manifest that tells the analysis tools which data
//! files belong to a run and where their plots and event table go. It is
//! assembled from whatever has been downloaded under `<data_root>/<run>/`:
//!
//! - `aci/<sat>_l2_aci_ipd_*.cdf`, sorted
//! - `ead/<sat>_def_ead_*.cdf`, sorted
//! - `**/omni*.cdf`, in directory walk order
//!
//! # Examples
//!
//! ```rust,no_run
//! use tracers_fetcher::app::case_file::{CaseFileBuilder, CaseFileRequest, Layout};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let builder = CaseFileBuilder::new(Layout::default());
//! let written = builder.build(&CaseFileRequest {
//!     run_name: "december_storm".to_string(),
//!     satellite: "TS2".to_string(),
//!     reverse_effect: false,
//!     inverse_effect: false,
//! })?;
//! println!("Case file: {}", written.path.display());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod scanner;
pub mod types;

pub use builder::{parse_satellite, read_case_file, to_json, write_case_file, CaseFileBuilder};
pub use scanner::ScanPattern;
pub use types::{CaseFile, CaseFileRequest, Layout, WrittenCaseFile};
