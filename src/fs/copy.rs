//! Sample file copying.

use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::paths::ensure_dir;

/// What happened to a sample copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The sample was copied; holds the number of bytes written.
    Copied(u64),
    /// The destination already existed and overwriting is off.
    Skipped,
}

/// Copy a sample to its destination, creating the parent directory first.
///
/// Copying a file onto itself is refused, since the destination is truncated
/// before it is written.
pub fn copy_sample(src: &Path, dst: &Path, overwrite: bool) -> Result<CopyOutcome> {
    let copy_error = |source: io::Error| Error::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    if dst.exists() {
        if is_same_file(src, dst) {
            return Err(copy_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same file",
            )));
        }
        if !overwrite {
            tracing::debug!("Destination exists, skipping: {}", dst.display());
            return Ok(CopyOutcome::Skipped);
        }
    }

    if let Some(parent) = dst.parent() {
        ensure_dir(parent).map_err(copy_error)?;
    }

    let bytes = std::fs::copy(src, dst).map_err(copy_error)?;

    Ok(CopyOutcome::Copied(bytes))
}

/// Whether both paths resolve to the same file on disk.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
