//! Path and directory management.

use std::io;
use std::path::{Path, PathBuf};

/// Resolve a sample path against the directory of its descriptor.
///
/// Absolute sample paths are returned unchanged.
pub fn resolve_source_path(descriptor_path: &Path, sample_path: &str) -> PathBuf {
    let base_dir = descriptor_path.parent().unwrap_or(Path::new(""));
    base_dir.join(sample_path)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_source_path(Path::new("/packs/Kit.dspreset"), "Samples/BD.wav"),
            PathBuf::from("/packs/Samples/BD.wav")
        );
        assert_eq!(
            resolve_source_path(Path::new("Kit.dspreset"), "BD.wav"),
            PathBuf::from("BD.wav")
        );
    }

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(
            resolve_source_path(Path::new("/packs/Kit.dspreset"), "/lib/BD.wav"),
            PathBuf::from("/lib/BD.wav")
        );
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Techno From Mars").join("Kick");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
