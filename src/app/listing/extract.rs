//! File name extraction from raw directory listings
//!
//! Listings are searched as plain text. The portal's HTML is never parsed;
//! every non-overlapping occurrence of a category's file name convention is
//! taken as an entry, wherever it appears in the body.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::debug;

use crate::app::models::{RemoteEntry, Version};

/// Counters describing one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Occurrences of the file name stem in the listing
    pub candidates: usize,
    /// Entries produced
    pub matched: usize,
    /// Candidates that did not form a valid entry
    pub skipped: usize,
}

/// Entries found in a listing plus the counters for the pass
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub entries: Vec<RemoteEntry>,
    pub stats: ExtractionStats,
}

/// Compiled `<stem>_YYYYMMDD_v<major>.<minor>.<revision>.<ext>` convention
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    stem: String,
    regex: Regex,
}

impl FilenamePattern {
    /// Build the pattern for a file name stem and extension
    ///
    /// Both parts are matched literally.
    pub fn new(stem: &str, extension: &str) -> Self {
        let pattern = format!(
            r"{}_([0-9]{{4}})([0-9]{{2}})([0-9]{{2}})_v([0-9]+)\.([0-9]+)\.([0-9]+)\.{}",
            regex::escape(stem),
            regex::escape(extension)
        );
        let regex = Regex::new(&pattern).expect("Regex pattern should always compile");

        Self {
            stem: stem.to_string(),
            regex,
        }
    }

    /// The literal file name stem
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extract every well-formed entry from listing text
    ///
    /// Matches with an impossible calendar date or a version component that
    /// does not fit in `u32` are counted as skipped instead of failing.
    pub fn extract(&self, text: &str) -> Extraction {
        let candidates = text.matches(&format!("{}_", self.stem)).count();

        let entries: Vec<RemoteEntry> = self
            .regex
            .captures_iter(text)
            .filter_map(|caps| parse_entry(&caps))
            .collect();

        let stats = ExtractionStats {
            candidates,
            matched: entries.len(),
            skipped: candidates.saturating_sub(entries.len()),
        };

        debug!(
            "Extracted {} entries for {} ({} candidates, {} skipped)",
            stats.matched, self.stem, stats.candidates, stats.skipped
        );

        Extraction { entries, stats }
    }
}

fn parse_entry(caps: &Captures<'_>) -> Option<RemoteEntry> {
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(2)?, number(3)?)?;
    let version = Version::new(number(4)?, number(5)?, number(6)?);

    Some(RemoteEntry {
        date,
        version,
        filename: caps.get(0)?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aci_pattern() -> FilenamePattern {
        FilenamePattern::new("ts2_l2_aci_ipd", "cdf")
    }

    #[test]
    fn test_extracts_from_html_listing() {
        let listing = r#"
            <html><body><pre>
            <a href="ts2_l2_aci_ipd_20250101_v1.0.0.cdf">ts2_l2_aci_ipd_20250101_v1.0.0.cdf</a>  12-Jan-2025 10:00  1.2M
            <a href="ts2_l2_aci_ipd_20250102_v1.2.10.cdf">ts2_l2_aci_ipd_20250102_v1.2.10.cdf</a>  13-Jan-2025 10:00  1.1M
            </pre></body></html>
        "#;

        let extraction = aci_pattern().extract(listing);

        // Each file appears twice: in the href and in the link text
        assert_eq!(extraction.entries.len(), 4);
        assert_eq!(extraction.stats.skipped, 0);

        let first = &extraction.entries[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(first.version, Version::new(1, 0, 0));
        assert_eq!(first.filename, "ts2_l2_aci_ipd_20250101_v1.0.0.cdf");

        let third = &extraction.entries[2];
        assert_eq!(third.version, Version::new(1, 2, 10));
    }

    #[test]
    fn test_malformed_names_are_skipped() {
        let listing = "\
            ts2_l2_aci_ipd_20250101_v1.0.0.cdf\n\
            ts2_l2_aci_ipd_2025011_v1.0.0.cdf\n\
            ts2_l2_aci_ipd_20250231_v1.0.0.cdf\n\
            ts2_l2_aci_ipd_20250103_v1.0.cdf\n\
            ts2_l2_aci_ipd_20250104_v1.0.0.txt\n\
            ts2_l2_aci_ipd_20250105_v99999999999.0.0.cdf\n";

        let extraction = aci_pattern().extract(listing);

        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].filename, "ts2_l2_aci_ipd_20250101_v1.0.0.cdf");
        assert_eq!(extraction.stats.candidates, 6);
        assert_eq!(extraction.stats.skipped, 5);
    }

    #[test]
    fn test_other_instruments_are_ignored() {
        let listing = "ts2_l2_ace_ipd_20250101_v1.0.0.cdf ts1_l2_aci_ipd_20250101_v1.0.0.cdf";
        let extraction = aci_pattern().extract(listing);
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.stats.candidates, 0);
    }

    #[test]
    fn test_stem_is_matched_literally() {
        // A '.' in the stem must not act as a wildcard
        let pattern = FilenamePattern::new("a.b", "cdf");
        let extraction = pattern.extract("axb_20250101_v1.0.0.cdf a.b_20250101_v1.0.0.cdf");
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].filename, "a.b_20250101_v1.0.0.cdf");
    }

    #[test]
    fn test_empty_listing() {
        let extraction = aci_pattern().extract("");
        assert!(extraction.entries.is_empty());
        assert_eq!(extraction.stats, ExtractionStats::default());
    }
}
