//! Progress and timing helpers for the CLI

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a step of unknown length
///
/// Hidden automatically when stderr is not a terminal.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Runtime in seconds, minutes and hours, as recorded in the run log
pub fn format_runtime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    format!(
        "{:.2} seconds | {:.2} minutes | {:.4} hours",
        secs,
        secs / 60.0,
        secs / 3600.0
    )
}
