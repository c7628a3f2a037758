//! Colored status reporting for release-verify
//!
//! Uses owo-colors for terminal colors. Status lines go to stderr so that
//! stdout carries nothing but the final verdict (or the error line).

use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress (or re-enable) status lines on stderr.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether status lines are currently suppressed.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print an action header (blue, bold)
/// Example: "==> Downloading go1.22.3.src.tar.gz"
pub fn action(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a detail line (dimmed)
/// Example: "     downloaded go1.22.3.src.tar.gz (27 bytes)"
pub fn detail(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("     {}", message.dimmed());
}

/// Print a success message (green)
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "==>".green().bold(), message.green());
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Print the verdict line on stdout: `true` or `false`.
pub fn verdict(matches: bool) {
    println!("{}", matches);
}

/// Print a failure on stdout as exactly one line.
pub fn failure(message: &str) {
    println!("{}", first_line(message));
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}
