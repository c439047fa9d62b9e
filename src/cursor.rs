//! Pull-based depth-first traversal over regular files.

use crate::error::WalkError;
use crate::fs::{FileSystem, StdFileSystem};
use crate::options::WalkOptions;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Not-yet-visited entries of one directory level.
pub(crate) type Frame = VecDeque<PathBuf>;

/// A resumable depth-first cursor over the regular files under a root.
///
/// The cursor keeps an explicit stack of frames, innermost directory on
/// top. A directory is listed once, when it is first descended into, and its
/// entries are visited before any later sibling of the directory.
///
/// Directories that are symbolic links or unreadable are never entered.
/// A directory that was eligible but then fails to list is skipped as if
/// empty; see [`FileCursor::failures`].
pub struct FileCursor<F: FileSystem = StdFileSystem> {
    pub(crate) fs: F,
    pub(crate) stack: Vec<Frame>,
    pub(crate) failures: Vec<WalkError>,
}

impl FileCursor<StdFileSystem> {
    /// Opens a cursor on the real filesystem from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Listing`] if the root cannot be listed.
    pub fn new(options: &WalkOptions) -> Result<Self, WalkError> {
        Self::open(
            StdFileSystem,
            &options.root,
            options.resume_after.as_deref(),
        )
    }
}

impl<F: FileSystem> FileCursor<F> {
    /// Opens a cursor on `root`, positioned right after `resume_after`.
    ///
    /// A missing resume target, or one equal to `root`, starts from the
    /// beginning. A target that is never reached leaves the cursor
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Listing`] if the root cannot be listed.
    pub fn open(fs: F, root: impl AsRef<Path>, resume_after: Option<&Path>) -> Result<Self, WalkError> {
        let root = root.as_ref();
        #[cfg(feature = "logging")]
        tracing::debug!("Opening traversal at {}", root.display());
        let listing = fs.list(root)?;
        let mut cursor = Self {
            fs,
            stack: vec![Frame::from(listing)],
            failures: Vec::new(),
        };
        if let Some(target) = resume_after.filter(|target| *target != root) {
            cursor.skip_through(target);
        }
        Ok(cursor)
    }

    /// Reports whether at least one more file remains.
    ///
    /// This never changes what [`take_next`](Self::take_next) returns, no
    /// matter how often it is called. Unopened directories are listed to
    /// answer, breadth-first, and the listings are thrown away.
    pub fn has_next(&self) -> bool {
        let mut unopened: VecDeque<PathBuf> = VecDeque::new();
        for frame in self.stack.iter().rev() {
            for entry in frame {
                let class = self.fs.classify(entry);
                if class.is_file {
                    return true;
                }
                if class.is_descendable() {
                    unopened.push_back(entry.clone());
                }
            }
        }
        while let Some(dir) = unopened.pop_front() {
            let children = match self.fs.list(&dir) {
                Ok(children) => children,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping unlistable directory during look-ahead: {}", _e);
                    continue;
                }
            };
            for child in children {
                let class = self.fs.classify(&child);
                if class.is_file {
                    return true;
                }
                if class.is_descendable() {
                    unopened.push_back(child);
                }
            }
        }
        false
    }

    /// Takes the next file.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Exhausted`] when no file remains.
    pub fn take_next(&mut self) -> Result<PathBuf, WalkError> {
        self.advance().ok_or(WalkError::Exhausted)
    }

    /// Directory listing failures skipped so far.
    pub fn failures(&self) -> &[WalkError] {
        &self.failures
    }

    /// Drains the failures recorded so far, so a long walk does not keep
    /// every one of them alive.
    pub fn take_failures(&mut self) -> Vec<WalkError> {
        std::mem::take(&mut self.failures)
    }

    fn advance(&mut self) -> Option<PathBuf> {
        while let Some(frame) = self.stack.last_mut() {
            let Some(entry) = frame.pop_front() else {
                self.stack.pop();
                continue;
            };
            let class = self.fs.classify(&entry);
            if class.is_file {
                return Some(entry);
            }
            if class.is_descendable() {
                self.descend(&entry);
            }
        }
        None
    }

    /// Pushes the listing of `dir` on top of the stack. A listing failure
    /// is recorded and the directory is treated as empty.
    pub(crate) fn descend(&mut self, dir: &Path) {
        match self.fs.list(dir) {
            Ok(children) => self.stack.push(Frame::from(children)),
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping directory: {}", e);
                self.failures.push(e);
            }
        }
    }
}

impl<F: FileSystem> Iterator for FileCursor<F> {
    type Item = PathBuf;
    fn next(&mut self) -> Option<PathBuf> {
        self.advance()
    }
}

impl<F: FileSystem> FusedIterator for FileCursor<F> {}
