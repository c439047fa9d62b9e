use crate::cursor::FileCursor;
use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::options::WalkOptions;
use crate::types::WalkBatch;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
/// Walks every file under `root` from the beginning.
pub fn walk(root: impl AsRef<Path>) -> Result<FileCursor, WalkError> {
    walk_with(&WalkOptions {
        root: root.as_ref().to_path_buf(),
        ..Default::default()
    })
}
/// Walks the files under `root` that come after `resume_after`.
pub fn walk_from(
    root: impl AsRef<Path>,
    resume_after: impl AsRef<Path>,
) -> Result<FileCursor, WalkError> {
    walk_with(&WalkOptions {
        root: root.as_ref().to_path_buf(),
        resume_after: Some(resume_after.as_ref().to_path_buf()),
        ..Default::default()
    })
}
pub fn walk_with(options: &WalkOptions) -> Result<FileCursor, WalkError> {
    FileCursor::new(options)
}
/// Takes up to `options.max_files` files from the real filesystem.
pub fn walk_batch(options: &WalkOptions) -> Result<WalkBatch, WalkError> {
    let cursor = FileCursor::new(options)?;
    Ok(take_batch(cursor, options))
}
/// Like [`walk_batch`], reading through `fs`.
pub fn walk_batch_in<F: FileSystem>(fs: F, options: &WalkOptions) -> Result<WalkBatch, WalkError> {
    let cursor = FileCursor::open(fs, &options.root, options.resume_after.as_deref())?;
    Ok(take_batch(cursor, options))
}
fn take_batch<F: FileSystem>(mut cursor: FileCursor<F>, options: &WalkOptions) -> WalkBatch {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Taking batch from {} (limit: {:?})",
        options.root.display(),
        options.max_files
    );
    let files: Vec<PathBuf> = match options.max_files {
        Some(limit) => cursor.by_ref().take(limit).collect(),
        None => cursor.by_ref().collect(),
    };
    let has_more = cursor.has_next();
    let checkpoint = files
        .last()
        .cloned()
        .or_else(|| options.resume_after.clone());
    let skipped: Vec<PathBuf> = cursor
        .take_failures()
        .iter()
        .filter_map(WalkError::path)
        .map(Path::to_path_buf)
        .collect();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Batch done: {} files, {} skipped directories, more: {}",
        files.len(),
        skipped.len(),
        has_more
    );
    WalkBatch {
        root: options.root.clone(),
        files,
        checkpoint,
        has_more,
        skipped,
    }
}
