//! Data models for TRACERS Fetcher
//!
//! This module defines the core data structures shared by the acquisition and
//! case-file pipelines: satellite identifiers, file version triples, parsed
//! listing entries, resolved downloads and the inclusive date window.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// TRACERS spacecraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Satellite {
    /// TRACERS spacecraft 1
    Ts1,
    /// TRACERS spacecraft 2
    Ts2,
}

impl Satellite {
    /// All supported satellites
    pub const ALL: [Satellite; 2] = [Satellite::Ts1, Satellite::Ts2];

    /// Parse a satellite code, ignoring case (e.g., "ts2", "TS2")
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "TS1" => Some(Self::Ts1),
            "TS2" => Some(Self::Ts2),
            _ => None,
        }
    }

    /// Upper-case code used in case files and portal paths (e.g., "TS2")
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ts1 => "TS1",
            Self::Ts2 => "TS2",
        }
    }

    /// Lower-case code used in file names (e.g., "ts2")
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Self::Ts1 => "ts1",
            Self::Ts2 => "ts2",
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// File version triple embedded in data file names (`v<major>.<minor>.<revision>`)
///
/// Field order gives the derived ordering: major first, then minor, then revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// One data file name found in a remote directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    /// Observation day the file covers
    pub date: NaiveDate,
    /// Version parsed from the file name
    pub version: Version,
    /// File name exactly as it appears in the listing
    pub filename: String,
}

/// The authoritative file chosen for one observation day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub date: NaiveDate,
    pub url: Url,
    pub version: Version,
}

impl ResolvedFile {
    /// File name component of the download URL
    pub fn file_name(&self) -> Option<&str> {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
    }
}

/// Inclusive range of observation days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window; `start` after `end` is allowed and selects nothing
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies within `[start, end]`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True when the window cannot contain any date
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_satellite_from_code_case_insensitive() {
        assert_eq!(Satellite::from_code("ts1"), Some(Satellite::Ts1));
        assert_eq!(Satellite::from_code("TS2"), Some(Satellite::Ts2));
        assert_eq!(Satellite::from_code("Ts2"), Some(Satellite::Ts2));
        assert_eq!(Satellite::from_code("TS3"), None);
        assert_eq!(Satellite::from_code(""), None);
    }

    #[test]
    fn test_satellite_serializes_upper_case() {
        let json = serde_json::to_string(&Satellite::Ts2).unwrap();
        assert_eq!(json, "\"TS2\"");
        let parsed: Satellite = serde_json::from_str("\"TS1\"").unwrap();
        assert_eq!(parsed, Satellite::Ts1);
    }

    #[test]
    fn test_version_ordering_is_lexicographic() {
        assert!(Version::new(1, 2, 0) > Version::new(1, 1, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::new(1, 1, 10) > Version::new(1, 1, 9));
        assert_eq!(Version::new(1, 0, 0), Version::new(1, 0, 0));
        assert_eq!(Version::new(1, 2, 3).to_string(), "v1.2.3");
    }

    #[test]
    fn test_date_window_bounds_inclusive() {
        let window = DateWindow::new(date(2025, 1, 1), date(2025, 1, 2));

        assert!(window.contains(date(2025, 1, 1)));
        assert!(window.contains(date(2025, 1, 2)));
        assert!(!window.contains(date(2024, 12, 31)));
        assert!(!window.contains(date(2025, 1, 3)));
        assert!(!window.is_empty());
    }

    #[test]
    fn test_reversed_window_selects_nothing() {
        let window = DateWindow::new(date(2025, 1, 5), date(2025, 1, 1));
        assert!(window.is_empty());
        assert!(!window.contains(date(2025, 1, 3)));
    }

    #[test]
    fn test_resolved_file_name() {
        let resolved = ResolvedFile {
            date: date(2025, 1, 1),
            url: Url::parse("https://example.com/ACI/ts2/l2/aci/ipd/ts2_l2_aci_ipd_20250101_v1.1.0.cdf")
                .unwrap(),
            version: Version::new(1, 1, 0),
        };
        assert_eq!(
            resolved.file_name(),
            Some("ts2_l2_aci_ipd_20250101_v1.1.0.cdf")
        );
    }
}
