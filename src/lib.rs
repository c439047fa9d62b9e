//! # Resumewalk
//!
//! `resumewalk` walks the regular files under a directory depth-first, one at a time, and can
//! restart an interrupted walk right after the last file a previous run handled.
//!
//! Symbolic links to directories are never followed and unreadable directories are never
//! entered, so the walk cannot loop. Directories are listed lazily, in the order the filesystem
//! returns their entries, and the listing is kept until the directory is drained.
//!
//! Resuming replays the walk from the start and discards everything up to the resume target,
//! so it still works when the tree changed between runs. A target that no longer exists leaves
//! nothing to do rather than replaying files that were already handled.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use resumewalk::{WalkBuilder, walk_batch};
//!
//! let options = WalkBuilder::new("/data")
//!     .resume_after("/data/2024/report.csv")
//!     .max_files(1000)
//!     .build();
//!
//! let batch = walk_batch(&options).expect("Failed to walk directory");
//!
//! for file in &batch.files {
//!     println!("File: {}", file.display());
//! }
//! if batch.has_more {
//!     println!("Resume after: {:?}", batch.checkpoint);
//! }
//! ```

mod cursor;
mod engine;
mod error;
mod fs;
mod options;
pub mod output;
mod resume;
mod types;

pub use cursor::FileCursor;
pub use engine::{walk, walk_batch, walk_batch_in, walk_from, walk_with};
pub use error::WalkError;
pub use fs::{FileSystem, StdFileSystem};
pub use options::{WalkBuilder, WalkOptions};
pub use types::{EntryClass, WalkBatch};
