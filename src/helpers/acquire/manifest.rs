//! Release manifest model and checksum lookup
//!
//! The manifest is the JSON array published by the distribution service
//! (for Go, `https://go.dev/dl/?mode=json`):
//!
//! ```json
//! [
//!   {
//!     "version": "go1.22.3",
//!     "stable": true,
//!     "files": [
//!       { "filename": "go1.22.3.src.tar.gz", "sha256": "80648ef3...", "kind": "source" }
//!     ]
//!   }
//! ]
//! ```
//!
//! Only `version`, `files`, `filename` and `sha256` are read; other keys are
//! ignored.
//!
//! ## Duplicate entries
//!
//! Nothing stops a manifest from listing the same version twice. Lookup is
//! first-match-wins in manifest order and does not flag duplicates.

use crate::core::error::{Result, VerifyError};
use crate::helpers::acquire::http;
use serde::Deserialize;
use std::time::Duration;

/// One downloadable file of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub filename: String,
    /// Hex digest, exactly as published.
    #[serde(default)]
    pub sha256: String,
}

/// One release and its files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseRecord {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Ordered list of releases, in the order the service published them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ReleaseManifest(pub Vec<ReleaseRecord>);

impl ReleaseManifest {
    /// Decode a manifest from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn releases(&self) -> &[ReleaseRecord] {
        &self.0
    }

    /// Find the entry for `filename` in release `version`.
    ///
    /// Records are scanned in order; every record whose version matches is
    /// searched until one of them lists the file. Comparison is exact.
    pub fn lookup(&self, version: &str, filename: &str) -> Option<&FileEntry> {
        self.0
            .iter()
            .filter(|release| release.version == version)
            .flat_map(|release| release.files.iter())
            .find(|file| file.filename == filename)
    }

    /// Like [`lookup`](Self::lookup), but returns the digest or a lookup error.
    pub fn expected_sha256(&self, version: &str, filename: &str) -> Result<&str> {
        self.lookup(version, filename)
            .map(|file| file.sha256.as_str())
            .ok_or_else(|| VerifyError::Lookup {
                version: version.to_owned(),
                filename: filename.to_owned(),
            })
    }
}

/// Fetch the manifest at `manifest_url` and return the published SHA-256
/// of `filename` in release `version`, verbatim.
pub fn resolve(
    manifest_url: &str,
    version: &str,
    filename: &str,
    timeout: Duration,
) -> Result<String> {
    let manifest: ReleaseManifest = http::get_json(manifest_url, timeout)?;
    manifest
        .expected_sha256(version, filename)
        .map(str::to_owned)
}
