//! Progress display for acquisition runs
//!
//! One indicatif bar per category, driven by the acquisition's
//! [`ProgressEvent`]s. Bars are hidden when stderr is not a terminal or in
//! quiet mode; completed files are then logged instead.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::acquisition::ProgressEvent;

/// Configuration for progress display
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Enable visual progress bars
    pub enable_progress_bars: bool,
    /// Spinner tick interval
    pub tick_interval: Duration,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enable_progress_bars: true,
            tick_interval: Duration::from_millis(100),
        }
    }
}

/// Renders acquisition progress
pub struct ProgressDisplay {
    config: ProgressConfig,
    is_terminal: bool,
    current: Option<ProgressBar>,
}

impl ProgressDisplay {
    /// Create a new progress display with the given configuration
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            is_terminal: atty::is(atty::Stream::Stderr),
            current: None,
        }
    }

    fn bars_enabled(&self) -> bool {
        self.config.enable_progress_bars && self.is_terminal
    }

    fn category_bar(&self, label: &str, total: usize) -> ProgressBar {
        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:>4} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        progress.set_prefix(label.to_string());
        progress.enable_steady_tick(self.config.tick_interval);
        progress
    }

    /// Apply one progress event
    pub fn handle(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::CategoryStarted { category, total } => {
                let label = category.instrument_tag.to_uppercase();
                debug!("{}: {} files to fetch", label, total);
                if self.bars_enabled() {
                    self.current = Some(self.category_bar(&label, total));
                }
            }
            ProgressEvent::FileCompleted { category, path } => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match &self.current {
                    Some(progress) => {
                        progress.set_message(file_name);
                        progress.inc(1);
                    }
                    None => info!("{}: {}", category.name, path.display()),
                }
            }
            ProgressEvent::CategoryFinished { category } => {
                if let Some(progress) = self.current.take() {
                    progress.finish_with_message(format!("{} done", category.name));
                }
            }
        }
    }

    /// Clear any bar left unfinished by a failed run
    pub fn abandon(&mut self) {
        if let Some(progress) = self.current.take() {
            progress.abandon();
        }
    }
}
