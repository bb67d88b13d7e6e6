//! Facebook to Journal - turn a Facebook posts export into a chronological journal
//!
//! This library reads the `your_posts*.json` file of a Facebook data export and
//! produces a tab-delimited journal (`date`, `text`, `photo`). It supports:
//!
//! - Lenient loading of posts whose optional fields may be missing or malformed
//! - Repairing the export's mojibake (UTF-8 bytes written as Latin-1 chars)
//! - Merging title, post text, tags and shared links into a single entry text
//! - Aggregating entries into fixed time buckets (hourly, daily, ...)
//! - Importing each post into a Day One journal through the `dayone2` CLI
//!
//! # Example
//!
//! ```no_run
//! use facebook_to_journal::{Config, run};
//!
//! let config = Config { freq: "1D".parse()?, ..Config::default() };
//! let summary = run(&config, None)?;
//! println!("Wrote {} journal rows from {} posts", summary.rows, summary.posts);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod normalizer;
pub mod parsers;
pub mod pipeline;
pub mod utils;
pub mod writer;

// Re-export commonly used types
pub use aggregator::aggregate;
pub use config::Config;
pub use error::{ImportError, JournalError};
pub use models::{AggregatedEntry, Frequency, NormalizedEntry, Post};
pub use normalizer::normalize;
pub use parsers::load_posts;
pub use pipeline::{RunSummary, run};
pub use utils::format_path_with_tilde;
pub use writer::write_tsv;
