//! Progress reporting for long-running operations, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a sampling progress bar
pub const SAMPLING_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Progress bar for Monte Carlo sampling runs
#[must_use]
pub fn sampling_progress_bar(samples: u64) -> ProgressBar {
    let pb = ProgressBar::new(samples);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(SAMPLING_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("sampling baseline");
    pb
}

/// Spinner for operations without a known length
#[must_use]
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {elapsed_precise} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
