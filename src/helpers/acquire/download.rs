//! Download helper for the release archive
//!
//! The response body is streamed into a temporary file beside the
//! destination, then renamed into place. A failed download therefore never
//! leaves a half-written archive at `dest`.

use crate::core::error::{Result, VerifyError};
use crate::core::output;
use crate::helpers::acquire::http;
use crate::helpers::internal::fs_utils;
use crate::helpers::internal::progress::{self, ProgressGuard, upgrade_to_bytes};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

/// Download `url` to `dest`, creating or replacing it.
///
/// `timeout` limits connecting and each read from the socket; the total
/// transfer time is unbounded. Returns the number of bytes written.
///
/// # Example
/// ```ignore
/// let bytes = download("https://go.dev/dl/go1.22.3.src.tar.gz", Path::new("go1.22.3.src.tar.gz"), timeout)?;
/// ```
pub fn download(url: &str, dest: &Path, timeout: Duration) -> Result<u64> {
    fs_utils::ensure_parent_dir(dest)?;

    let filename = dest
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "download".to_string());

    let total_bytes = download_with_progress(url, dest, &filename, timeout)?;
    output::detail(&format!("downloaded {} ({} bytes)", filename, total_bytes));

    Ok(total_bytes)
}

fn download_with_progress(
    url: &str,
    dest: &Path,
    filename: &str,
    timeout: Duration,
) -> Result<u64> {
    let pb = progress::create_spinner(&format!("downloading {}", filename));
    let _guard = ProgressGuard::new(&pb);

    let response = http::get_stream(url, timeout)?;

    if let Some(len) = response
        .header("content-length")
        .and_then(|s| s.parse().ok())
    {
        upgrade_to_bytes(&pb, len);
    }

    let mut tmp = fs_utils::temp_sibling(dest)?;

    let mut reader = response.into_reader();
    let mut buffer = [0u8; 8192];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(VerifyError::Network {
                    url: url.to_owned(),
                    reason: format!("read error after {} bytes: {}", total_bytes, e),
                });
            }
        };

        tmp.write_all(&buffer[..bytes_read])
            .map_err(|e| VerifyError::fs(tmp.path(), "write", e))?;

        total_bytes += bytes_read as u64;
        pb.set_position(total_bytes);
    }

    tmp.as_file()
        .sync_all()
        .map_err(|e| VerifyError::fs(tmp.path(), "flush", e))?;
    fs_utils::persist(tmp, dest)?;

    Ok(total_bytes)
}
