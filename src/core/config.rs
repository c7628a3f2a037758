//! Verification configuration
//!
//! Built-in defaults describe the Go 1.22.3 source archive. They can be
//! overridden by `release-verify/config.toml` in the XDG config directories,
//! by an explicit config file, and finally by CLI flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ARCHIVE_URL: &str = "https://go.dev/dl/go1.22.3.src.tar.gz";
pub const DEFAULT_MANIFEST_URL: &str = "https://go.dev/dl/?mode=json";
pub const DEFAULT_VERSION: &str = "go1.22.3";
pub const DEFAULT_FILENAME: &str = "go1.22.3.src.tar.gz";

/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

const MIN_HTTP_TIMEOUT_SECS: u64 = 5;
const MAX_HTTP_TIMEOUT_SECS: u64 = 300;

const CONFIG_DIR_NAME: &str = "release-verify";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Everything one verification run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    pub archive_url: String,
    pub manifest_url: String,
    pub version: String,
    pub filename: String,
    /// Where the archive is written. Defaults to `filename` in the working directory.
    pub dest: PathBuf,
    pub http_timeout: Duration,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_owned(),
            manifest_url: DEFAULT_MANIFEST_URL.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            filename: DEFAULT_FILENAME.to_owned(),
            dest: PathBuf::from(DEFAULT_FILENAME),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

/// Optional overrides, as read from a TOML file or assembled from CLI flags.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub archive_url: Option<String>,
    pub manifest_url: Option<String>,
    pub version: Option<String>,
    pub filename: Option<String>,
    pub dest: Option<PathBuf>,
    pub http_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Layer `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: ConfigOverrides) {
        if other.archive_url.is_some() {
            self.archive_url = other.archive_url;
        }
        if other.manifest_url.is_some() {
            self.manifest_url = other.manifest_url;
        }
        if other.version.is_some() {
            self.version = other.version;
        }
        if other.filename.is_some() {
            self.filename = other.filename;
        }
        if other.dest.is_some() {
            self.dest = other.dest;
        }
        if other.http_timeout_secs.is_some() {
            self.http_timeout_secs = other.http_timeout_secs;
        }
    }

    /// Resolve against the built-in defaults.
    pub fn resolve(self) -> VerifyConfig {
        let defaults = VerifyConfig::default();
        let filename = self.filename.unwrap_or(defaults.filename);
        // An explicit destination wins; otherwise follow the (possibly overridden) filename.
        let dest = self.dest.unwrap_or_else(|| PathBuf::from(&filename));
        let timeout_secs = self
            .http_timeout_secs
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
            .clamp(MIN_HTTP_TIMEOUT_SECS, MAX_HTTP_TIMEOUT_SECS);

        VerifyConfig {
            archive_url: self.archive_url.unwrap_or(defaults.archive_url),
            manifest_url: self.manifest_url.unwrap_or(defaults.manifest_url),
            version: self.version.unwrap_or(defaults.version),
            filename,
            dest,
            http_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn split_xdg_config_dirs() -> Vec<PathBuf> {
    let raw = std::env::var("XDG_CONFIG_DIRS").unwrap_or_else(|_| "/etc/xdg".to_owned());
    raw.split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn xdg_config_home() -> PathBuf {
    if let Ok(raw) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".").join(".config"))
}

/// Candidate config files, lowest precedence first.
pub fn find_config_files() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = split_xdg_config_dirs()
        .into_iter()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .collect();
    paths.push(xdg_config_home().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    paths
}

/// Parse one TOML config file.
pub fn read_config_file(path: &Path) -> Result<ConfigOverrides> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid TOML in {}", path.display()))
}

/// Merge the XDG config files, then `explicit` (which must exist), then `cli`.
pub fn load(explicit: Option<&Path>, cli: ConfigOverrides) -> Result<VerifyConfig> {
    load_from(&find_config_files(), explicit, cli)
}

fn load_from(
    candidates: &[PathBuf],
    explicit: Option<&Path>,
    cli: ConfigOverrides,
) -> Result<VerifyConfig> {
    let mut merged = ConfigOverrides::default();

    for path in candidates.iter().filter(|p| p.is_file()) {
        merged.merge(read_config_file(path)?);
    }

    if let Some(path) = explicit {
        merged.merge(read_config_file(path)?);
    }

    merged.merge(cli);
    Ok(merged.resolve())
}
