//! Helper functions behind a verification run
//!
//! ## Design: All Pure Functions
//!
//! Every helper takes explicit inputs and returns explicit outputs, with no
//! hidden state shared between them. The only side effect is the archive
//! file written by `download`:
//!
//! ```ignore
//! let bytes = download(url, dest, timeout)?;
//! let expected = resolve(manifest_url, "go1.22.3", "go1.22.3.src.tar.gz", timeout)?;
//! let actual = sha256_file(dest)?;
//! ```
//!
//! ## Categories
//!
//! - **acquire**: download(url, dest), resolve(manifest_url, version, filename)
//! - **internal**: sha256_file, progress bars, filesystem utilities

pub mod acquire;
pub mod internal;
