use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A snapshot classification of one directory entry.
///
/// `is_dir` and `is_file` describe what the path resolves to, following
/// symbolic links. `is_symlink` describes the entry itself. Nothing here is
/// assumed to stay valid after the call that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryClass {
    pub is_dir: bool,
    pub is_file: bool,
    pub is_symlink: bool,
    pub is_readable: bool,
}

impl EntryClass {
    /// Whether the traversal may descend into this entry.
    ///
    /// Symbolic links are never followed, even when they point at a
    /// readable directory.
    pub fn is_descendable(&self) -> bool {
        self.is_dir && !self.is_symlink && self.is_readable
    }
}

/// One batch of files taken from a traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkBatch {
    /// The root the traversal started from.
    pub root: PathBuf,
    /// Files yielded in traversal order.
    pub files: Vec<PathBuf>,
    /// The path to pass as the resume target of the next batch.
    ///
    /// This is the last file in `files`, or the incoming resume target when
    /// the batch is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<PathBuf>,
    /// Whether at least one more file remains after this batch.
    pub has_more: bool,
    /// Directories that should have been entered but failed to list, and
    /// were skipped as if empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}
