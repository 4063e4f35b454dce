#![deny(unsafe_code)]

//! # Overview
//!
//! `walk` enumerates a local filesystem subtree into a
//! [`model::Inventory`] of [`model::LocalObject`] entries, keyed by a
//! forward-slash-delimited identifier relative to the walked root.
//!
//! # Design
//!
//! Traversal is delegated to [`jwalk::WalkDir`] (the same dependency the
//! teacher workspace uses for fast parallel directory walks), configured
//! with `follow_links(false)` so symlinks are neither traversed into nor
//! recorded as objects — the spec leaves the exact symlink policy as an
//! implementation choice (§4.2) and this crate takes the conservative one.
//!
//! Per-entry errors (permission denied, a file disappearing mid-walk) are
//! logged via `tracing` and the entry is skipped; only the root itself being
//! missing or not a directory is fatal, returned as
//! [`WalkError::NotADirectory`].

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use model::{Inventory, LocalObject, Object};
use thiserror::Error;

/// Errors that can occur while enumerating a local directory tree.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root path does not exist, or exists but is not a directory.
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}

/// Recursively enumerates `root` into an [`Inventory`] of [`LocalObject`].
///
/// # Errors
///
/// Returns [`WalkError::NotADirectory`] if `root` does not exist or is not a
/// directory. Individual file errors encountered during the walk (races,
/// permission failures on a single entry) do not fail the call; they are
/// logged and the entry is omitted from the resulting inventory.
pub fn list_local_objects(root: &Path) -> Result<Inventory<LocalObject>, WalkError> {
    if !root.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut inventory = Inventory::new();

    for entry in jwalk::WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };

        let file_type = entry.file_type();
        if !file_type.is_file() {
            // Directories produce no entries of their own; symlinks are not followed.
            continue;
        }

        let path = entry.path();
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => {
                tracing::warn!(path = %path.display(), "entry escaped walk root, skipping");
                continue;
            }
        };

        let id = relative_path_to_id(relative);
        if id.is_empty() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(error) => {
                tracing::warn!(%error, id, "failed to stat entry, skipping");
                continue;
            }
        };

        let size = metadata.len();
        let last_modified = match metadata.modified() {
            Ok(modified) => modified
                .duration_since(UNIX_EPOCH)
                .map(|duration| duration.as_millis() as i64)
                .unwrap_or(0),
            Err(error) => {
                tracing::warn!(%error, id, "failed to read modification time, skipping");
                continue;
            }
        };

        let object = Object::new(id.clone(), size, last_modified);
        if let Err(error) = inventory.insert(id, LocalObject::new(object, path)) {
            tracing::warn!(%error, "failed to insert walked entry into inventory");
        }
    }

    Ok(inventory)
}

/// Rewrites a relative filesystem path into a canonical `/`-delimited id.
fn relative_path_to_id(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_root_is_not_a_directory() {
        let error = list_local_objects(Path::new("/nonexistent/path/for/bucket-sync-tests"))
            .unwrap_err();
        assert!(matches!(error, WalkError::NotADirectory(_)));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let error = list_local_objects(temp.path()).unwrap_err();
        assert!(matches!(error, WalkError::NotADirectory(_)));
    }

    #[test]
    fn enumerates_nested_files_with_posix_ids() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("def/jkl")).unwrap();
        fs::write(temp.path().join("def/jkl/xmoj"), b"abc").unwrap();
        fs::write(temp.path().join("top.txt"), b"hello").unwrap();

        let inventory = list_local_objects(temp.path()).unwrap();

        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains("def/jkl/xmoj"));
        assert!(inventory.contains("top.txt"));
        assert_eq!(inventory.get("def/jkl/xmoj").unwrap().object.size, 3);
    }

    #[test]
    fn empty_directories_produce_no_entries() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("empty/nested")).unwrap();

        let inventory = list_local_objects(temp.path()).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn empty_root_yields_empty_inventory() {
        let temp = tempfile::tempdir().unwrap();
        let inventory = list_local_objects(temp.path()).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn hidden_files_are_included() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".hidden"), b"x").unwrap();

        let inventory = list_local_objects(temp.path()).unwrap();
        assert!(inventory.contains(".hidden"));
    }
}
