//! Core types for case file assembly

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::models::Satellite;
use crate::constants::layout;

/// Declarative manifest consumed by the downstream analysis tools
///
/// Key names and order are fixed by the consumers; do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    #[serde(rename = "STORM_NAME")]
    pub storm_name: String,
    #[serde(rename = "SATELLITE")]
    pub satellite: Satellite,
    /// Sorted
    #[serde(rename = "ACI_FILES")]
    pub aci_files: Vec<String>,
    /// Sorted
    #[serde(rename = "EAD_FILES")]
    pub ead_files: Vec<String>,
    /// Directory scan order, not sorted
    #[serde(rename = "OMNIWEB_FILES")]
    pub omniweb_files: Vec<String>,
    #[serde(rename = "PLOT_OUTPUT")]
    pub plot_output: String,
    #[serde(rename = "EVENT_OUTPUT")]
    pub event_output: String,
    #[serde(rename = "REVERSE_EFFECT")]
    pub reverse_effect: bool,
    #[serde(rename = "INVERSE_EFFECT")]
    pub inverse_effect: bool,
}

/// Where downloaded data is read from and where case files and outputs go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Root of `<run>/<category>/` download directories
    pub data_root: PathBuf,
    /// Directory receiving `<run>_<SAT>.json`
    pub case_dir: PathBuf,
    /// Root of `<run>_F<SAT>/` analysis output directories
    pub output_root: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(layout::DATA_ROOT),
            case_dir: PathBuf::from(layout::CASE_DIR),
            output_root: PathBuf::from(layout::OUTPUT_ROOT),
        }
    }
}

impl Layout {
    /// Layout with every root placed under `base`, used by tests and tooling
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            data_root: base.join("data"),
            case_dir: base.join(layout::CASE_DIR),
            output_root: base.join(layout::OUTPUT_ROOT),
        }
    }

    /// `<data_root>/<run>`
    pub fn run_dir(&self, run_name: &str) -> PathBuf {
        self.data_root.join(run_name)
    }

    /// `<case_dir>/<run>_<SAT>.json`
    pub fn case_file_path(&self, run_name: &str, satellite: Satellite) -> PathBuf {
        self.case_dir
            .join(format!("{}_{}.json", run_name, satellite.code()))
    }

    /// `<output_root>/<run>_F<SAT>`
    pub fn output_dir(&self, run_name: &str, satellite: Satellite) -> PathBuf {
        self.output_root
            .join(format!("{}_F{}", run_name, satellite.code()))
    }

    /// `<output_root>/<run>_F<SAT>/plots`
    pub fn plot_dir(&self, run_name: &str, satellite: Satellite) -> PathBuf {
        self.output_dir(run_name, satellite).join("plots")
    }

    /// `<output_root>/<run>_F<SAT>/<run>_<SAT>.csv`
    pub fn event_path(&self, run_name: &str, satellite: Satellite) -> PathBuf {
        self.output_dir(run_name, satellite)
            .join(format!("{}_{}.csv", run_name, satellite.code()))
    }
}

/// Inputs for one case file
#[derive(Debug, Clone)]
pub struct CaseFileRequest {
    pub run_name: String,
    /// Satellite as typed by the user; validated when the case file is built
    pub satellite: String,
    pub reverse_effect: bool,
    pub inverse_effect: bool,
}

/// Result of writing a case file
#[derive(Debug, Clone)]
pub struct WrittenCaseFile {
    pub path: PathBuf,
    pub case_file: CaseFile,
}
