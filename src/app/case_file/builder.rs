//! Case file assembly and persistence

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use super::scanner::ScanPattern;
use super::types::{CaseFile, CaseFileRequest, Layout, WrittenCaseFile};
use crate::app::catalog::{ACI, EAD};
use crate::app::models::Satellite;
use crate::errors::{CaseFileError, CaseFileResult};

/// Parse a user-supplied satellite code
///
/// # Errors
///
/// Returns `CaseFileError::InvalidSatellite` for anything but TS1 or TS2
pub fn parse_satellite(value: &str) -> CaseFileResult<Satellite> {
    Satellite::from_code(value).ok_or_else(|| CaseFileError::InvalidSatellite {
        value: value.to_string(),
    })
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Builds case files against one directory layout
#[derive(Debug, Clone, Default)]
pub struct CaseFileBuilder {
    layout: Layout,
}

impl CaseFileBuilder {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Assemble a case file from the files currently on disk
    ///
    /// Nothing is written or created.
    ///
    /// # Errors
    ///
    /// Returns `CaseFileError::EmptyRunName` or `CaseFileError::InvalidSatellite`
    pub fn assemble(&self, request: &CaseFileRequest) -> CaseFileResult<CaseFile> {
        if request.run_name.trim().is_empty() {
            return Err(CaseFileError::EmptyRunName);
        }
        let satellite = parse_satellite(&request.satellite)?;
        let run_name = request.run_name.as_str();
        let data_root = &self.layout.data_root;

        let scan = |pattern: ScanPattern, dir: PathBuf| -> Vec<String> {
            pattern.scan(&dir).iter().map(|p| path_string(p)).collect()
        };

        let aci_files = scan(
            ScanPattern::instrument(&ACI, satellite),
            ACI.local_dir(data_root, run_name),
        );
        let ead_files = scan(
            ScanPattern::instrument(&EAD, satellite),
            EAD.local_dir(data_root, run_name),
        );
        let omniweb_files = scan(ScanPattern::omniweb(), self.layout.run_dir(run_name));

        debug!(
            "Case {} {}: {} ACI, {} EAD, {} OMNIWeb files",
            run_name,
            satellite,
            aci_files.len(),
            ead_files.len(),
            omniweb_files.len()
        );

        Ok(CaseFile {
            storm_name: run_name.to_string(),
            satellite,
            aci_files,
            ead_files,
            omniweb_files,
            plot_output: path_string(&self.layout.plot_dir(run_name, satellite)),
            event_output: path_string(&self.layout.event_path(run_name, satellite)),
            reverse_effect: request.reverse_effect,
            inverse_effect: request.inverse_effect,
        })
    }

    /// Assemble, create the plot directory, and write the case file
    ///
    /// The write is not atomic. Validation failures happen before anything
    /// touches the filesystem.
    ///
    /// # Errors
    ///
    /// Returns `CaseFileError` on invalid input or if a directory or the file
    /// cannot be written
    pub fn build(&self, request: &CaseFileRequest) -> CaseFileResult<WrittenCaseFile> {
        let case_file = self.assemble(request)?;

        let plot_dir = PathBuf::from(&case_file.plot_output);
        fs::create_dir_all(&plot_dir).map_err(|source| CaseFileError::Write {
            path: plot_dir.clone(),
            source,
        })?;

        fs::create_dir_all(&self.layout.case_dir).map_err(|source| CaseFileError::Write {
            path: self.layout.case_dir.clone(),
            source,
        })?;

        let path = self
            .layout
            .case_file_path(&case_file.storm_name, case_file.satellite);
        write_case_file(&path, &case_file)?;

        info!("Wrote case file {}", path.display());
        Ok(WrittenCaseFile { path, case_file })
    }
}

/// Serialize as 4-space indented JSON with a trailing newline
pub fn to_json(case_file: &CaseFile) -> CaseFileResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    case_file.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Write a case file to `path`, replacing any existing file
pub fn write_case_file(path: &Path, case_file: &CaseFile) -> CaseFileResult<()> {
    let json = to_json(case_file)?;
    fs::write(path, json).map_err(|source| CaseFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a case file back
pub fn read_case_file(path: &Path) -> CaseFileResult<CaseFile> {
    let contents = fs::read_to_string(path).map_err(|source| CaseFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
