//! Download a release archive and check it against its published checksum
//!
//! A run performs four steps, in order, stopping at the first failure:
//!
//! 1. download the archive to a local file;
//! 2. fetch the release manifest (a JSON array of releases and their files)
//!    and look up the SHA-256 published for `version` + `filename`;
//! 3. hash the downloaded file;
//! 4. compare the two hex digests, case-sensitively.
//!
//! # Example
//!
//! ```no_run
//! use release_verify::{VerifyConfig, verify};
//!
//! let config = VerifyConfig::default(); // go1.22.3 source archive from go.dev
//! let outcome = verify::run(&config)?;
//! println!("{}", outcome.matches());
//! # Ok::<(), release_verify::VerifyError>(())
//! ```
//!
//! # Manifest shape
//!
//! ```json
//! [{"version": "go1.22.3", "files": [{"filename": "go1.22.3.src.tar.gz", "sha256": "..."}]}]
//! ```

pub mod core;
pub mod helpers;
pub mod verify;

pub use crate::core::config::VerifyConfig;
pub use crate::core::error::VerifyError;
pub use crate::core::output;
pub use helpers::acquire::{FileEntry, ReleaseManifest, ReleaseRecord};
