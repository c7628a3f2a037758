//! SHA-256 digests of local files
//!
//! Files are streamed through the hasher in fixed-size chunks, so memory use
//! does not grow with the archive size.

use crate::core::error::{Result, VerifyError};
use crate::helpers::internal::progress::{self, ProgressGuard};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Chunk size for reading files during hashing (1MB)
const CHUNK_SIZE: usize = 1024 * 1024;

/// Threshold for showing progress (100MB)
const PROGRESS_THRESHOLD: u64 = 100 * 1024 * 1024;

/// Compute the SHA-256 of a file, rendered as lowercase hex.
///
/// Shows progress for files larger than 100MB. The file handle is closed on
/// every exit path when `f` goes out of scope.
///
/// # Example
/// ```ignore
/// let digest = sha256_file(Path::new("go1.22.3.src.tar.gz"))?;
/// assert_eq!(digest.len(), 64);
/// ```
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut f = std::fs::File::open(path).map_err(|e| VerifyError::fs(path, "open", e))?;

    let file_size = f.metadata().map(|m| m.len()).unwrap_or(0);
    let pb = if file_size > PROGRESS_THRESHOLD {
        progress::create_byte_progress("checksum", file_size)
    } else {
        indicatif::ProgressBar::hidden()
    };
    let _guard = ProgressGuard::new(&pb);

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = match f.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(VerifyError::Hash {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        hasher.update(&buffer[..n]);
        pb.inc(n as u64);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 of an in-memory buffer, rendered as lowercase hex.
pub fn sha256_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
