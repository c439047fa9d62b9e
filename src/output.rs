//! Output formatting for walk batches.
//!
//! Provides functions to format a [`WalkBatch`] as a plain path list or JSON.

use crate::{WalkBatch, WalkError};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Paths,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Paths => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the batch into a string.
pub fn format_batch(batch: &WalkBatch, format: OutputFormat, pretty: bool) -> Result<String, WalkError> {
    match format {
        OutputFormat::Paths => Ok(format_paths(batch)),
        OutputFormat::Json => format_json(batch, pretty),
    }
}

/// Resolves where a batch goes: an existing directory gets a `batch.<ext>`
/// file inside it, anything else is used as given.
pub fn output_file(path: impl AsRef<Path>, format: OutputFormat) -> PathBuf {
    let path = path.as_ref();
    if path.is_dir() {
        path.join(format!("batch.{}", format.extension()))
    } else {
        path.to_path_buf()
    }
}

/// Writes the formatted batch to a file and returns the path written.
pub fn write_batch_to_file(
    batch: &WalkBatch,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<PathBuf, WalkError> {
    let content = format_batch(batch, format, pretty)?;
    let path = output_file(path, format);
    fs::write(&path, content).map_err(|e| WalkError::io(&path, e))?;
    Ok(path)
}

// ----------------------- Internal formatting -----------------------

fn format_paths(batch: &WalkBatch) -> String {
    let mut out = String::with_capacity(batch.files.len() * 64);
    for file in &batch.files {
        out.push_str(&file.display().to_string());
        out.push('\n');
    }
    out
}

fn format_json(batch: &WalkBatch, pretty: bool) -> Result<String, WalkError> {
    let mut json = if pretty {
        serde_json::to_string_pretty(batch)?
    } else {
        serde_json::to_string(batch)?
    };
    json.push('\n');
    Ok(json)
}
