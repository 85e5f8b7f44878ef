//! TRACERS Fetcher Library
//!
//! Downloads TRACERS mission data files from the science portal, keeping the
//! newest version of each day in a date window, and builds the JSON case
//! files that point the analysis tools at the downloaded data.

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
