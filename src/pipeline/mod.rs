//! End-to-end conversion: load, normalize (and import), aggregate, write.
//!
//! # Error Handling Strategy
//!
//! - **Fatal**: load, missing timestamp and write failures abort the run with a
//!   [`JournalError`] naming the stage.
//! - **Recovered per record**: a failed journal import is logged with `warn!`,
//!   counted in [`RunSummary::import_failures`], and processing moves on to the
//!   next post.
//!
//! Everything runs sequentially; each import finishes before the next post is
//! normalized.

pub mod stats;

pub use stats::ExportStats;

use tracing::{info, warn};

use crate::aggregator::aggregate;
use crate::config::Config;
use crate::error::JournalError;
use crate::import::EntrySink;
use crate::models::{NormalizedEntry, Post};
use crate::normalizer::normalize;
use crate::parsers::load_posts;
use crate::writer::write_tsv;

const PROGRESS_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub posts: usize,
    pub imported: usize,
    pub import_failures: usize,
    pub rows: usize,
}

/// Convert the export named by `config` into the TSV journal.
///
/// Every normalized entry is passed to `sink`, when given, before aggregation.
pub fn run(config: &Config, sink: Option<&mut dyn EntrySink>) -> Result<RunSummary, JournalError> {
    let posts = load_posts(&config.infile)?;
    let (entries, mut summary) = normalize_posts(&posts, sink)?;

    let rows = aggregate(&entries, config.freq);
    info!(entries = entries.len(), rows = rows.len(), freq = %config.freq, "aggregated entries");

    write_tsv(&config.outfile, &rows, config.freq)?;
    summary.rows = rows.len();

    Ok(summary)
}

/// Normalize every post in order, handing each entry to `sink` as it is produced.
pub fn normalize_posts(
    posts: &[Post],
    mut sink: Option<&mut dyn EntrySink>,
) -> Result<(Vec<NormalizedEntry>, RunSummary), JournalError> {
    let mut summary = RunSummary { posts: posts.len(), ..RunSummary::default() };
    let mut entries = Vec::with_capacity(posts.len());

    for (index, post) in posts.iter().enumerate() {
        let entry = normalize(index, post)?;
        info!(index, date = %entry.date.format(PROGRESS_DATE_FORMAT), "processing post");

        if let Some(sink) = sink.as_deref_mut() {
            match sink.import(&entry) {
                Ok(()) => summary.imported += 1,
                Err(e) => {
                    warn!(index, error = %e, "journal import failed");
                    summary.import_failures += 1;
                }
            }
        }

        entries.push(entry);
    }

    Ok((entries, summary))
}
