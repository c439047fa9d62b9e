//! Command-line interface for resumewalk.
//!
//! Lists one batch of files under a directory, optionally picking up right
//! after a file a previous run stopped at.

use clap::{Parser, ValueEnum};
use resumewalk::{WalkBatch, WalkBuilder, WalkOptions, output, walk_batch};
use std::path::PathBuf;
use std::process::exit;

/// resumewalk — resumable depth-first file listing
#[derive(Parser)]
#[command(name = "resumewalk", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Resume right after this file (usually the checkpoint of a previous run)
    #[arg(short, long, value_name = "PATH")]
    resume_after: Option<PathBuf>,

    /// Stop after this many files (unlimited if not set)
    #[arg(short = 'n', long)]
    max_files: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Paths)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write to this file instead of stdout (a directory gets `batch.txt` or `batch.json`)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbose logging (needs the `logging` feature)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Paths,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Paths => output::OutputFormat::Paths,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (WalkOptions, OutputFormat, bool, Option<PathBuf>, bool) {
        let mut builder = WalkBuilder::new(self.root).resume_after_opt(self.resume_after);

        builder = if let Some(limit) = self.max_files {
            builder.max_files(limit)
        } else {
            builder.no_limit()
        };

        (
            builder.build(),
            self.format,
            self.pretty,
            self.output,
            self.verbose,
        )
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, output_path, verbose) = cli.into_options();

    setup_logging(verbose);

    match walk_batch(&options) {
        Ok(batch) => output_batch(&batch, format, pretty, output_path),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "logging")]
fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("resumewalk=debug,warn")
    } else {
        EnvFilter::new("resumewalk=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
fn setup_logging(_verbose: bool) {}

fn output_batch(batch: &WalkBatch, format: OutputFormat, pretty: bool, path: Option<PathBuf>) {
    let format = output::OutputFormat::from(format);
    let result = match path {
        Some(path) => output::write_batch_to_file(batch, format, path, pretty).map(|_| ()),
        None => output::format_batch(batch, format, pretty).map(|out| print!("{}", out)),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }

    for dir in &batch.skipped {
        eprintln!("Skipped unlistable directory: {}", dir.display());
    }

    if format == output::OutputFormat::Paths
        && batch.has_more
        && let Some(checkpoint) = &batch.checkpoint
    {
        eprintln!("More files remain; resume with --resume-after {}", checkpoint.display());
    }
}
