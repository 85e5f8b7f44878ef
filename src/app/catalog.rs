//! Registry of TRACERS data categories
//!
//! Every downloadable category is described by a declarative [`Category`]
//! record: where its listing lives on the portal, how its file names are
//! built, and whether the portal keeps several versions of a day's file.
//! Adding a category means adding a record here, nothing else.
//!
//! Templates use `{sat}` for the lower-case satellite code (`ts2`) and
//! `{SAT}` for the upper-case one (`TS2`).

use std::path::{Path, PathBuf};

use url::Url;

use crate::app::listing::FilenamePattern;
use crate::app::models::Satellite;
use crate::constants::layout;
use crate::errors::{ListingError, ListingResult};

/// One instrument data category served by the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Short name, also the local subdirectory (e.g., "aci")
    pub name: &'static str,
    /// Instrument code as written in file names
    pub instrument_tag: &'static str,
    /// Listing directory relative to the portal base URL; ends with '/'
    pub path_template: &'static str,
    /// File name stem preceding `_YYYYMMDD_v...`
    pub stem_template: &'static str,
    /// Whether the listing can hold several versions of the same day
    pub versioned: bool,
}

/// Analyzer for Cusp Ions, level 2 ion pitch-angle distributions
pub const ACI: Category = Category {
    name: "aci",
    instrument_tag: "aci",
    path_template: "ACI/{sat}/l2/aci/ipd/",
    stem_template: "{sat}_l2_aci_ipd",
    versioned: true,
};

/// Analyzer for Cusp Electrons, same layout as ACI
pub const ACE: Category = Category {
    name: "ace",
    instrument_tag: "ace",
    path_template: "ACI/{sat}/l2/ace/ipd/",
    stem_template: "{sat}_l2_ace_ipd",
    versioned: true,
};

/// Definitive ephemeris and attitude from the SOC; one file per day
pub const EAD: Category = Category {
    name: "ead",
    instrument_tag: "ead",
    path_template: "SOC/{SAT}/ead/def/",
    stem_template: "{sat}_def_ead",
    versioned: false,
};

/// All known categories
pub const CATEGORIES: [Category; 3] = [ACI, ACE, EAD];

/// Categories fetched when none are requested explicitly
pub const DEFAULT_DOWNLOADS: [Category; 2] = [ACI, EAD];

fn expand(template: &str, satellite: Satellite) -> String {
    template
        .replace("{sat}", satellite.file_prefix())
        .replace("{SAT}", satellite.code())
}

impl Category {
    /// Look a category up by name, ignoring case
    pub fn lookup(name: &str) -> ListingResult<Category> {
        CATEGORIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| ListingError::UnknownCategory {
                name: name.to_string(),
                known: CATEGORIES
                    .iter()
                    .map(|c| c.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Listing directory path for a satellite, relative to the portal base
    pub fn listing_path(&self, satellite: Satellite) -> String {
        expand(self.path_template, satellite)
    }

    /// File name stem for a satellite (e.g., "ts2_l2_aci_ipd")
    pub fn file_stem(&self, satellite: Satellite) -> String {
        expand(self.stem_template, satellite)
    }

    /// Absolute listing URL under `base`
    pub fn listing_url(&self, base: &Url, satellite: Satellite) -> ListingResult<Url> {
        base.join(&self.listing_path(satellite))
            .map_err(|e| ListingError::InvalidUrl {
                category: self.name.to_string(),
                error: e.to_string(),
            })
    }

    /// Pattern matching this category's file names in a listing
    pub fn pattern(&self, satellite: Satellite) -> FilenamePattern {
        FilenamePattern::new(&self.file_stem(satellite), layout::DATA_EXTENSION)
    }

    /// Local download directory: `<data_root>/<run>/<name>`
    pub fn local_dir(&self, data_root: &Path, run_name: &str) -> PathBuf {
        data_root.join(run_name).join(self.name)
    }
}
