use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Fatal pipeline failures. Each variant names the stage that failed.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("load stage failed for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("load stage failed for {}: not a list of posts: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "load stage failed for {}: file too large ({size} bytes, max {max} bytes)",
        path.display()
    )]
    InputTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("normalize stage failed: post {index} has no timestamp")]
    MissingTimestamp { index: usize },

    #[error("write stage failed for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// A failed journal import. Always recovered: logged and counted, never fatal.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("journal import exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("failed to write import command: {0}")]
    Output(#[from] std::io::Error),
}
