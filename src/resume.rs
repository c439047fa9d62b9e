//! Fast-forwarding a fresh cursor past a previously yielded path.

use crate::cursor::FileCursor;
use crate::fs::FileSystem;
use std::path::Path;

impl<F: FileSystem> FileCursor<F> {
    /// Drains the traversal up to and including `target`.
    ///
    /// Only eligible directories that are ancestors of `target` are listed;
    /// any other subtree cannot contain it and is dropped unlisted. Ancestry
    /// is decided per path component, so `/data/a` is not an ancestor of
    /// `/data/ab/file`.
    ///
    /// When `target` names a directory, that directory's contents count as
    /// already processed. When it is never reached the stack ends up empty.
    pub(crate) fn skip_through(&mut self, target: &Path) {
        #[cfg(feature = "logging")]
        tracing::debug!("Resuming after {}", target.display());
        while let Some(frame) = self.stack.last_mut() {
            let Some(entry) = frame.pop_front() else {
                self.stack.pop();
                continue;
            };
            if entry == target {
                return;
            }
            if target.starts_with(&entry) && self.fs.classify(&entry).is_descendable() {
                self.descend(&entry);
            }
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Resume target {} not found, nothing left", target.display());
    }
}
