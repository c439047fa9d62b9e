#![allow(dead_code)]
use resumewalk::{EntryClass, FileSystem, WalkError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

enum Node {
    Dir { readable: bool, lists: bool },
    File,
    Link(PathBuf),
}

/// In-memory tree that lists children in insertion order.
#[derive(Default)]
pub struct MemFs {
    nodes: HashMap<PathBuf, Node>,
    children: HashMap<PathBuf, Vec<PathBuf>>,
    listed: RefCell<Vec<PathBuf>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: true, lists: true })
    }
    pub fn file(self, path: &str) -> Self {
        self.insert(path, Node::File)
    }
    pub fn symlink(self, path: &str, target: &str) -> Self {
        self.insert(path, Node::Link(PathBuf::from(target)))
    }
    pub fn unreadable_dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: false, lists: false })
    }
    /// A directory that looks readable but fails when listed.
    pub fn failing_dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: true, lists: false })
    }
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }
    fn insert(mut self, path: &str, node: Node) -> Self {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            self.children
                .entry(parent.to_path_buf())
                .or_default()
                .push(path.clone());
        }
        self.nodes.insert(path, node);
        self
    }
    fn resolve(&self, path: &Path) -> Option<&Node> {
        let mut node = self.nodes.get(path)?;
        for _ in 0..8 {
            match node {
                Node::Link(target) => node = self.nodes.get(target)?,
                _ => return Some(node),
            }
        }
        None
    }
}

impl FileSystem for MemFs {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
        self.listed.borrow_mut().push(dir.to_path_buf());
        match self.nodes.get(dir) {
            Some(Node::Dir { lists: true, .. }) => {
                Ok(self.children.get(dir).cloned().unwrap_or_default())
            }
            Some(Node::Dir { .. }) => Err(WalkError::listing(
                dir,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            )),
            _ => Err(WalkError::listing(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            )),
        }
    }

    fn classify(&self, path: &Path) -> EntryClass {
        let is_symlink = matches!(self.nodes.get(path), Some(Node::Link(_)));
        match self.resolve(path) {
            Some(Node::Dir { readable, .. }) => EntryClass {
                is_dir: true,
                is_file: false,
                is_symlink,
                is_readable: *readable,
            },
            Some(Node::File) => EntryClass {
                is_dir: false,
                is_file: true,
                is_symlink,
                is_readable: true,
            },
            _ => EntryClass {
                is_symlink,
                ..EntryClass::default()
            },
        }
    }
}

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
