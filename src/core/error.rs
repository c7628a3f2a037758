//! Error types for the download / resolve / hash pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while verifying a release archive.
///
/// Every variant renders as a single human-readable line, which is what the
/// binary prints before terminating.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("request to {url} failed: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("cannot {action} {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode manifest from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no checksum for {filename} in release {version}")]
    Lookup { version: String, filename: String },

    #[error("cannot hash {}: {source}", .path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VerifyError {
    pub(crate) fn fs(
        path: impl Into<PathBuf>,
        action: &'static str,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            path: path.into(),
            action,
            source,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, VerifyError>;
