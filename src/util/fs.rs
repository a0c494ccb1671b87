//! Filesystem helpers used around, not inside, the splitter.
//!
//! The splitter assumes its input path already resolves to a readable file;
//! these functions are how callers get there.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SplitError};

/// Resolves `path` against the current working directory.
///
/// Absolute paths are returned unchanged.
pub fn full_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(SplitError::CurrentDir)?;
    Ok(cwd.join(path))
}

/// Fails with [`SplitError::NotFound`] if nothing exists at `path`.
pub fn ensure_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.try_exists()? {
        Ok(())
    } else {
        Err(SplitError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Writes `contents` to `path`, creating missing parent directories first.
///
/// An existing file is truncated.
pub fn store_file_recursive(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SplitError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = contents.len(), "stored file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_absolute_unchanged() {
        let abs = std::env::temp_dir().join("x.bin");
        assert_eq!(full_path(&abs).unwrap(), abs);
    }

    #[test]
    fn test_full_path_relative_joins_cwd() {
        let resolved = full_path("data/input.txt").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("data/input.txt"));
    }

    #[test]
    fn test_store_and_ensure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c.txt");

        assert!(matches!(
            ensure_file_exists(&target),
            Err(SplitError::NotFound { .. })
        ));

        store_file_recursive(&target, b"hello").unwrap();
        ensure_file_exists(&target).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"hello");

        store_file_recursive(&target, b"").unwrap();
        assert!(fs::read(&target).unwrap().is_empty());
    }

    #[test]
    fn test_store_into_file_as_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let err = store_file_recursive(blocker.join("child.txt"), b"x").unwrap_err();
        assert!(matches!(err, SplitError::CreateDir { .. }));
    }
}
