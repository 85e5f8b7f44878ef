//! TRACERS Fetcher CLI application
//!
//! Command-line interface for downloading TRACERS instrument data and
//! building analysis case files.

use std::error::Error;
use std::process;

use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use tracers_fetcher::cli::{handle_auth, handle_case_file, handle_download, Cli, Commands};
use tracers_fetcher::config::AppConfig;
use tracers_fetcher::errors::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  Caused by: {}", cause);
            source = cause.source();
        }
        if e.is_recoverable() {
            eprintln!("This looks like a transient {} failure; try again later.", e.category());
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    let config = AppConfig::load(cli.global.config.clone()).await?;

    init_logging(&cli, &config);

    info!("TRACERS Fetcher v{} starting", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    match cli.command {
        Commands::Download(args) => {
            info!("Executing download command");
            handle_download(args, &config, cli.global.quiet).await
        }
        Commands::CaseFile(args) => {
            info!("Executing case-file command");
            handle_case_file(args, &config)
        }
        Commands::Auth(args) => {
            info!("Executing auth command");
            handle_auth(args, &config).await
        }
    }
}

/// Initialize logging from the verbosity flags, else the configured level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.clone());

    let filter = EnvFilter::from_default_env().add_directive(
        format!("tracers_fetcher={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into()),
    );

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
