//! The filesystem seam the traversal reads through.

use crate::error::WalkError;
use crate::types::EntryClass;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory listing and entry classification.
///
/// The cursor never touches the disk directly, so a tree can be served from
/// memory in tests or from some other backing store.
pub trait FileSystem {
    /// Lists the children of `dir` as full paths, in the order the backing
    /// store yields them.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Listing`] naming `dir` when it cannot be read.
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, WalkError>;

    /// Classifies `path`. An entry that cannot be inspected classifies as
    /// neither a file nor a directory.
    fn classify(&self, path: &Path) -> EntryClass;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
        (**self).list(dir)
    }
    fn classify(&self, path: &Path) -> EntryClass {
        (**self).classify(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
        let read_dir = fs::read_dir(dir).map_err(|e| WalkError::listing(dir, e))?;
        read_dir
            .map(|entry| {
                entry
                    .map(|entry| entry.path())
                    .map_err(|e| WalkError::listing(dir, e))
            })
            .collect()
    }

    fn classify(&self, path: &Path) -> EntryClass {
        let is_symlink = fs::symlink_metadata(path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        let Ok(target) = fs::metadata(path) else {
            return EntryClass {
                is_symlink,
                ..EntryClass::default()
            };
        };
        // Readability only matters for descent, so files are not opened.
        let is_readable = if target.is_dir() && !is_symlink {
            fs::read_dir(path).is_ok()
        } else {
            true
        };
        EntryClass {
            is_dir: target.is_dir(),
            is_file: target.is_file(),
            is_symlink,
            is_readable,
        }
    }
}
