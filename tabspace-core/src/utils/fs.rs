//! Filesystem utilities.
//!
//! Thin wrappers over `std::fs` that map `std::io::Error` into
//! [`CoreError::Filesystem`] with the offending path attached.
//!
//! The workspace document itself is written asynchronously by the domain store; these
//! helpers cover the synchronous setup paths (configuration and log directories).

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at `path`, creating missing parents.
///
/// Fails if the path exists but is not a directory.
///
/// ```no_run
/// # use tabspace_core::utils::fs::ensure_dir_exists;
/// let dir = tempfile::tempdir().unwrap();
/// let nested = dir.path().join("profile/tab-workspaces");
/// ensure_dir_exists(&nested).unwrap();
/// assert!(nested.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "Path exists but is not a directory"),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_ensure_dir_exists_creates_nested_directories() {
        let temp_root = tempdir().unwrap();
        let nested = temp_root.path().join("parent_dir/child_dir");

        ensure_dir_exists(&nested).expect("nested directories should be created");
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&nested).expect("existing directory is fine");
    }

    #[test]
    fn test_ensure_dir_exists_errors_if_path_is_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not a directory").unwrap();

        match ensure_dir_exists(temp_file.path()) {
            Err(CoreError::Filesystem { message, path, .. }) => {
                assert_eq!(message, "Path exists but is not a directory");
                assert_eq!(path, temp_file.path());
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ensure_dir_exists_creates_profile_layout() {
        let temp_root = tempdir().unwrap();
        let store_dir = temp_root.path().join("profile").join("tab-workspaces");

        ensure_dir_exists(&store_dir).unwrap();
        assert!(store_dir.parent().unwrap().is_dir());
        assert!(store_dir.is_dir());
    }
}
