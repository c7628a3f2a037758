//! Unified progress bar helpers
//!
//! Bars draw to stderr (indicatif's default target) and are hidden
//! entirely in quiet mode.

use crate::core::output;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Standard spinner characters
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Standard tick interval for spinners
const TICK_INTERVAL_MS: u64 = 80;

const BYTES_TEMPLATE: &str =
    "     {spinner:.cyan} {msg} [{bar:30.cyan/dim}] {bytes}/{total_bytes} ({eta})";

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("     {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_CHARS)
}

fn bytes_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(BYTES_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━╸━")
}

/// Create a spinner progress bar with standard styling.
///
/// # Example
/// ```ignore
/// let pb = create_spinner("downloading foo.tar.gz");
/// let _guard = ProgressGuard::new(&pb);
/// ```
pub fn create_spinner(message: &str) -> ProgressBar {
    if output::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(TICK_INTERVAL_MS));
    pb
}

/// Create a progress bar with byte tracking (for hashing large files).
pub fn create_byte_progress(message: &str, total_bytes: u64) -> ProgressBar {
    if output::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(bytes_style());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(TICK_INTERVAL_MS));
    pb
}

/// Upgrade a spinner to a byte progress bar when content length becomes known.
pub fn upgrade_to_bytes(pb: &ProgressBar, total_bytes: u64) {
    pb.set_length(total_bytes);
    pb.set_style(bytes_style());
}

/// RAII guard that clears a progress bar when dropped.
///
/// Keeps the terminal clean on `?` early returns.
pub struct ProgressGuard<'a>(&'a ProgressBar);

impl<'a> ProgressGuard<'a> {
    pub fn new(pb: &'a ProgressBar) -> Self {
        Self(pb)
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}
