//! ACQUIRE helpers - getting the archive and its published checksum
//!
//! ## Functions
//!
//! - **download**: Stream an HTTP(S) body into a local file
//! - **resolve**: Fetch the release manifest and look up one file's SHA-256
//! - **http::get / get_json**: GET with status checking and streaming JSON decode

pub mod download;
pub mod http;
pub mod manifest;

// Re-export commonly used items
pub use download::download;
pub use manifest::{FileEntry, ReleaseManifest, ReleaseRecord, resolve};
