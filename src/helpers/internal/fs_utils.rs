//! Common filesystem utilities
//!
//! The downloader never writes to its destination directly: bytes land in a
//! temporary sibling that is renamed into place only once complete.

use crate::core::error::{Result, VerifyError};
use std::path::Path;
use tempfile::NamedTempFile;

/// Directory a path lives in; `.` for bare relative file names.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Ensure a file's parent directory exists.
///
/// Creates the parent directory (and all ancestors) if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = parent_dir(path);
    if !parent.exists() {
        std::fs::create_dir_all(parent)
            .map_err(|e| VerifyError::fs(parent, "create directory", e))?;
    }
    Ok(())
}

/// Create an anonymous temporary file next to `dest`, so the final rename
/// stays on one filesystem.
///
/// On Unix the file is opened with mode 0666 minus the umask, the same as a
/// plain `File::create`, so the persisted archive is not left owner-only.
pub fn temp_sibling(dest: &Path) -> Result<NamedTempFile> {
    let dir = parent_dir(dest);
    let mut builder = tempfile::Builder::new();
    builder.prefix(".release-verify-").suffix(".part");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    builder
        .tempfile_in(dir)
        .map_err(|e| VerifyError::fs(dir, "create temporary file in", e))
}

/// Atomically move a finished temporary file onto `dest`, replacing it.
pub fn persist(tmp: NamedTempFile, dest: &Path) -> Result<()> {
    tmp.persist(dest)
        .map(|_| ())
        .map_err(|e| VerifyError::fs(dest, "write", e.error))
}
