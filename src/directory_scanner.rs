// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for listing every file under a root.
//!
//! Traversal is recursive and does not follow symbolic links. Files are
//! returned in the order the walker yields them; no sorting is applied.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lists every non-directory entry under `root`, at any depth.
///
/// If `root` is itself a file, the result is that single file.
///
/// # Errors
///
/// Returns [`Error::Scan`] if `root` cannot be opened. Entries below the
/// root that cannot be read are logged and skipped.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    files.push(entry.into_path());
                }
            }
            Err(err) if err.depth() == 0 => {
                return Err(Error::Scan(format!(
                    "cannot read directory {}: {err}",
                    root.display()
                )));
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
            }
        }
    }

    debug!(root = %root.display(), count = files.len(), "directory listed");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn list_files_finds_all_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "notes.txt");

        let files = list_files(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn list_files_descends_into_nested_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("2024").join("summer");
        fs::create_dir_all(&nested).expect("failed to create nested dirs");
        let top = create_test_file(temp_dir.path(), "top.jpg");
        let deep = create_test_file(&nested, "deep.jpg");

        let files = list_files(temp_dir.path()).expect("failed to scan directory");

        let found: HashSet<_> = files.into_iter().collect();
        assert_eq!(found, HashSet::from([top, deep]));
    }

    #[test]
    fn list_files_excludes_directories_and_has_no_duplicates() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("empty_dir")).expect("mkdir");
        let sub = temp_dir.path().join("sub");
        fs::create_dir_all(&sub).expect("mkdir");
        for name in ["1.jpg", "2.jpg"] {
            create_test_file(temp_dir.path(), name);
            create_test_file(&sub, name);
        }

        let files = list_files(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|p| p.is_file()));
        let unique: HashSet<_> = files.iter().collect();
        assert_eq!(unique.len(), files.len());
    }

    #[test]
    fn list_files_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let files = list_files(temp_dir.path()).expect("failed to scan directory");

        assert!(files.is_empty());
    }

    #[test]
    fn list_files_accepts_a_single_file_root() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let only = create_test_file(temp_dir.path(), "only.jpg");

        let files = list_files(&only).expect("failed to scan file root");

        assert_eq!(files, vec![only]);
    }

    #[cfg(unix)]
    #[test]
    fn list_files_skips_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let locked = temp_dir.path().join("locked");
        fs::create_dir_all(&locked).expect("mkdir");
        create_test_file(&locked, "hidden.jpg");
        let before = create_test_file(temp_dir.path(), "before.jpg");
        let nested = temp_dir.path().join("open");
        fs::create_dir_all(&nested).expect("mkdir");
        let after = create_test_file(&nested, "after.jpg");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
        // Root bypasses directory permissions; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
            return;
        }

        let result = list_files(temp_dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

        let found: HashSet<_> = result
            .expect("unreadable subdirectory must not abort the scan")
            .into_iter()
            .collect();
        assert_eq!(found, HashSet::from([before, after]));
    }

    #[test]
    fn list_files_fails_for_missing_root() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");

        let result = list_files(&missing);

        assert!(matches!(result, Err(Error::Scan(_))));
    }
}
