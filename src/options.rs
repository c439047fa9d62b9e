use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    pub root: PathBuf,
    pub resume_after: Option<PathBuf>,
    pub max_files: Option<usize>,
}
impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            resume_after: None,
            max_files: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct WalkBuilder {
    options: WalkOptions,
}
impl WalkBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: WalkOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn resume_after(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.resume_after = Some(path.into());
        self
    }
    pub fn resume_after_opt(mut self, path: Option<PathBuf>) -> Self {
        self.options.resume_after = path;
        self
    }
    pub fn max_files(mut self, limit: usize) -> Self {
        self.options.max_files = Some(limit);
        self
    }
    pub fn no_limit(mut self) -> Self {
        self.options.max_files = None;
        self
    }
    pub fn build(self) -> WalkOptions {
        self.options
    }
}
