//! Command handlers for TRACERS Fetcher CLI
//!
//! This module implements the command handlers that connect CLI arguments to
//! the core application functionality.

use std::time::Instant;

use tracing::{info, warn};

use crate::app::case_file::{CaseFileBuilder, CaseFileRequest};
use crate::app::{Acquisition, AcquisitionReport, AcquisitionRequest, PortalClient};
use crate::auth::{setup_credentials, show_auth_status, verify_credentials, Credentials};
use crate::cli::{
    AuthAction, AuthArgs, CaseFileArgs, DownloadArgs, ProgressConfig, ProgressDisplay,
};
use crate::config::AppConfig;
use crate::errors::{AuthError, Result};

/// Handle the download command
///
/// Fetches each requested category's listing, keeps the newest version of
/// every day in the window, and downloads the files sequentially.
pub async fn handle_download(args: DownloadArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let window = args.window();
    if window.is_empty() {
        warn!("Start date is after end date; nothing will be selected");
    }

    let credentials = Credentials::resolve(args.username.clone(), args.password.clone())?;
    let base_url = config.base_url()?;
    let client = PortalClient::new(credentials, base_url, &config.client_config())?;

    let request = AcquisitionRequest {
        satellite: args.satellite,
        window,
        run_name: args.run_name.clone(),
        categories: args.selected_categories(),
        data_root: config.layout().data_root,
        dry_run: args.dry_run,
    };

    let mut progress_display = ProgressDisplay::new(ProgressConfig {
        enable_progress_bars: !quiet,
        ..Default::default()
    });

    let result = Acquisition::new(&client)
        .run(&request, |event| progress_display.handle(event))
        .await;
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            progress_display.abandon();
            return Err(e);
        }
    };

    info!("Download command completed in {:?}", start_time.elapsed());
    if !quiet {
        print_download_summary(&report);
    }
    Ok(())
}

fn print_download_summary(report: &AcquisitionReport) {
    if report.dry_run {
        println!("\n🔍 Dry run - files that would be downloaded:");
        for category in &report.categories {
            for path in &category.files {
                println!("  {}", path.display());
            }
        }
    }

    println!("\n📊 Download Summary:");
    for category in &report.categories {
        println!(
            "  {}: {} of {} listed files in window{}",
            category.category.name,
            category.selected,
            category.listed,
            if report.dry_run {
                String::new()
            } else {
                format!(", saved to {}", category.local_dir.display())
            }
        );
        if category.stats.skipped > 0 {
            println!(
                "    ({} malformed file names ignored)",
                category.stats.skipped
            );
        }
    }
    println!(
        "  Total files {}: {}",
        if report.dry_run { "planned" } else { "downloaded" },
        report.total_files()
    );
}

/// Handle the case-file command
pub fn handle_case_file(args: CaseFileArgs, config: &AppConfig) -> Result<()> {
    let builder = CaseFileBuilder::new(config.layout());
    let written = builder.build(&CaseFileRequest {
        run_name: args.run_name,
        satellite: args.satellite,
        reverse_effect: args.reverse_effect,
        inverse_effect: args.inverse_effect,
    })?;

    let case_file = &written.case_file;
    println!("Case file written to {}", written.path.display());
    println!("  Plots will be saved to {}", case_file.plot_output);
    println!("  Events will be saved to {}", case_file.event_output);

    if case_file.aci_files.is_empty() && case_file.ead_files.is_empty() {
        warn!(
            "No ACI or EAD files found for run '{}'; run the download command first",
            case_file.storm_name
        );
    }
    Ok(())
}

/// Handle authentication commands
pub async fn handle_auth(args: AuthArgs, config: &AppConfig) -> Result<()> {
    let base_url = config.base_url()?;
    let client_config = config.client_config();

    match args.action {
        AuthAction::Setup => {
            setup_credentials(&base_url, &client_config).await?;
        }
        AuthAction::Verify => {
            let credentials = Credentials::resolve(None, None)?;
            let username = credentials.username.clone();
            if !verify_credentials(credentials, &base_url, &client_config).await? {
                return Err(AuthError::Rejected { username }.into());
            }
        }
        AuthAction::Status => {
            show_auth_status(&base_url, &client_config).await?;
        }
    }

    Ok(())
}
