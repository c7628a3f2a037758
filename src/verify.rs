//! The verification run: download, resolve, hash, compare.
//!
//! Steps execute strictly in that order and the first failure ends the run;
//! later steps are never attempted.

use crate::core::config::VerifyConfig;
use crate::core::error::Result;
use crate::core::output;
use crate::helpers::acquire::{download, resolve};
use crate::helpers::internal::hash::sha256_file;
use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Digest published in the manifest, verbatim.
    pub expected: String,
    /// Digest of the downloaded file, lowercase hex.
    pub actual: String,
    /// Where the archive was written.
    pub path: PathBuf,
    /// Size of the downloaded archive.
    pub bytes: u64,
}

impl Verification {
    /// Exact, case-sensitive comparison of the two hex strings.
    pub fn matches(&self) -> bool {
        self.expected == self.actual
    }
}

/// Run the full sequence described by `config`.
pub fn run(config: &VerifyConfig) -> Result<Verification> {
    output::action(&format!("Downloading {}", config.archive_url));
    let bytes = download(&config.archive_url, &config.dest, config.http_timeout)?;

    output::action(&format!("Resolving checksum from {}", config.manifest_url));
    let expected = resolve(
        &config.manifest_url,
        &config.version,
        &config.filename,
        config.http_timeout,
    )?;
    output::detail(&format!(
        "{} {}: {}",
        config.version, config.filename, expected
    ));

    output::action(&format!("Hashing {}", config.dest.display()));
    let actual = sha256_file(&config.dest)?;
    output::detail(&format!("sha256: {}", actual));

    let verification = Verification {
        expected,
        actual,
        path: config.dest.clone(),
        bytes,
    };

    if verification.matches() {
        output::success(&format!("{} matches the published checksum", config.filename));
    } else {
        output::warning(&format!(
            "checksum mismatch for {}\n  expected: {}\n  got:      {}",
            config.filename, verification.expected, verification.actual
        ));
    }

    Ok(verification)
}
