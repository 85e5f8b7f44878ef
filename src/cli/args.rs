//! Command-line argument parsing for TRACERS Fetcher
//!
//! This module defines the CLI structure using clap derive macros: data
//! acquisition, case file generation and credential management.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::app::catalog::{Category, DEFAULT_DOWNLOADS};
use crate::app::models::{DateWindow, Satellite};

/// TRACERS Fetcher - Download TRACERS mission data and build case files
#[derive(Parser, Debug)]
#[command(
    name = "tracers_fetcher",
    version,
    about = "Download TRACERS instrument data and build analysis case files",
    long_about = "Fetches TRACERS ACI and ephemeris files from the science portal for a date window,
keeping the newest version of each day, and writes the JSON case files used by the analysis tools."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download instrument files for a date window into ./data/<run>/
    Download(DownloadArgs),

    /// Build the JSON case file for a downloaded run
    CaseFile(CaseFileArgs),

    /// Manage authentication credentials
    Auth(AuthArgs),
}

/// Arguments for the download command
#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// First day to fetch, inclusive (M/D/YYYY)
    #[arg(value_parser = parse_date)]
    pub start_date: NaiveDate,

    /// Last day to fetch, inclusive (M/D/YYYY)
    #[arg(value_parser = parse_date)]
    pub end_date: NaiveDate,

    /// Run name; files are stored under ./data/<run_name>/
    pub run_name: String,

    /// Spacecraft to fetch (TS1 or TS2)
    #[arg(short, long, value_parser = parse_satellite)]
    pub satellite: Satellite,

    /// Portal username (defaults to TRACERS_USERNAME)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Portal password (defaults to TRACERS_PASSWORD)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Category to fetch; repeat for several (default: aci, ead)
    #[arg(short, long = "category", value_name = "NAME", value_parser = parse_category)]
    pub categories: Vec<Category>,

    /// Dry run - show what would be downloaded without downloading
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the case-file command
#[derive(Args, Debug, Clone)]
pub struct CaseFileArgs {
    /// Run name used when downloading
    pub run_name: String,

    /// Spacecraft (TS1 or TS2)
    pub satellite: String,

    /// Set REVERSE_EFFECT in the case file
    #[arg(long)]
    pub reverse_effect: bool,

    /// Set INVERSE_EFFECT in the case file
    #[arg(long)]
    pub inverse_effect: bool,
}

/// Arguments for authentication management
#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Authentication actions
#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Store portal credentials in ./.env
    Setup,

    /// Verify current credentials against the portal
    Verify,

    /// Show authentication status
    Status,
}

/// Parse an `M/D/YYYY` date; leading zeros are optional
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%m/%d/%Y")
        .map_err(|e| format!("expected a date as M/D/YYYY, got '{}': {}", value, e))
}

fn parse_satellite(value: &str) -> Result<Satellite, String> {
    Satellite::from_code(value)
        .ok_or_else(|| format!("satellite must be either TS1 or TS2, got '{}'", value))
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::lookup(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging level requested by the verbosity flags, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

impl DownloadArgs {
    /// Inclusive date window; may be empty when the dates are reversed
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }

    /// Requested categories without repeats, or the default set
    pub fn selected_categories(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            return DEFAULT_DOWNLOADS.to_vec();
        }

        let mut selected: Vec<Category> = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            if !selected.contains(category) {
                selected.push(*category);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::{ACE, ACI, EAD};

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("12/1/2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        assert_eq!(
            parse_date("01/02/2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        );
        assert!(parse_date("2025-12-01").is_err());
        assert!(parse_date("2/30/2025").is_err());
    }

    #[test]
    fn test_download_command_parsing() {
        let cli = Cli::try_parse_from([
            "tracers_fetcher",
            "download",
            "12/1/2025",
            "12/3/2025",
            "december_storm",
            "--satellite",
            "ts2",
            "--category",
            "ace",
            "--category",
            "ACE",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Download(args) = cli.command else {
            panic!("expected download command");
        };
        assert_eq!(args.satellite, Satellite::Ts2);
        assert_eq!(args.run_name, "december_storm");
        assert!(args.dry_run);
        assert_eq!(args.selected_categories(), vec![ACE]);
        assert!(args
            .window()
            .contains(NaiveDate::from_ymd_opt(2025, 12, 3).unwrap()));
    }

    #[test]
    fn test_default_categories() {
        let cli = Cli::try_parse_from([
            "tracers_fetcher",
            "download",
            "1/1/2025",
            "1/2/2025",
            "run",
            "-s",
            "TS1",
        ])
        .unwrap();

        let Commands::Download(args) = cli.command else {
            panic!("expected download command");
        };
        assert_eq!(args.selected_categories(), vec![ACI, EAD]);
        assert!(args.username.is_none());
    }

    #[test]
    fn test_download_rejects_bad_input() {
        let base = ["tracers_fetcher", "download", "1/1/2025", "1/2/2025", "run"];

        let mut bad_satellite = base.to_vec();
        bad_satellite.extend(["--satellite", "TS3"]);
        assert!(Cli::try_parse_from(bad_satellite).is_err());

        let mut bad_category = base.to_vec();
        bad_category.extend(["--satellite", "TS2", "--category", "mag"]);
        assert!(Cli::try_parse_from(bad_category).is_err());
    }

    #[test]
    fn test_case_file_keeps_raw_satellite() {
        let cli = Cli::try_parse_from([
            "tracers_fetcher",
            "case-file",
            "december_storm",
            "TS3",
            "--inverse-effect",
        ])
        .unwrap();

        let Commands::CaseFile(args) = cli.command else {
            panic!("expected case-file command");
        };
        assert_eq!(args.satellite, "TS3");
        assert!(args.inverse_effect);
        assert!(!args.reverse_effect);
    }

    #[test]
    fn test_log_level() {
        let cli_quiet = Cli {
            global: GlobalArgs {
                verbose: false,
                very_verbose: false,
                quiet: true,
                config: None,
            },
            command: Commands::Auth(AuthArgs {
                action: AuthAction::Status,
            }),
        };

        let cli_verbose = Cli {
            global: GlobalArgs {
                verbose: true,
                very_verbose: false,
                quiet: false,
                config: None,
            },
            command: Commands::Auth(AuthArgs {
                action: AuthAction::Status,
            }),
        };

        let cli_default = Cli::try_parse_from(["tracers_fetcher", "auth", "status"]).unwrap();

        assert_eq!(cli_quiet.log_level(), Some(tracing::Level::ERROR));
        assert_eq!(cli_verbose.log_level(), Some(tracing::Level::INFO));
        assert_eq!(cli_default.log_level(), None);
    }
}
