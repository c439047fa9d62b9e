use std::path::{Path, PathBuf};
use thiserror::Error;
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("failed to list directory {path}: {source}")]
    Listing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("next called after the last file was yielded")]
    Exhausted,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl WalkError {
    /// Builds the error a [`FileSystem`](crate::FileSystem) returns when a
    /// directory cannot be listed.
    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkError::Listing {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkError::Io {
            path: path.into(),
            source,
        }
    }
    /// The path the failure is about, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WalkError::Listing { path, .. } | WalkError::Io { path, .. } => Some(path),
            WalkError::Exhausted | WalkError::Serialize(_) => None,
        }
    }
}
