//! Command-line interface components
//!
//! This module contains CLI-specific code for the TRACERS Fetcher application,
//! including argument parsing, command handlers and progress display.

pub mod args;
pub mod commands;
pub mod progress;

pub use args::{
    AuthAction, AuthArgs, CaseFileArgs, Cli, Commands, DownloadArgs, GlobalArgs,
};
pub use commands::{handle_auth, handle_case_file, handle_download};
pub use progress::{ProgressConfig, ProgressDisplay};
