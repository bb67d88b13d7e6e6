use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::JournalError;
use crate::models::{AggregatedEntry, Frequency};

const HEADER: [&str; 3] = ["date", "text", "photo"];

/// One output line, with the date already labelled at bucket resolution.
#[derive(Debug, Serialize)]
struct TsvRow<'a> {
    date: String,
    text: &'a str,
    photo: &'a str,
}

/// Write aggregated rows to `path` as tab-separated values.
///
/// # Errors
///
/// Returns [`JournalError::Write`] if the file cannot be created or written.
pub fn write_tsv(
    path: &Path,
    rows: &[AggregatedEntry],
    frequency: Frequency,
) -> Result<(), JournalError> {
    let to_error = |source| JournalError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(|e| to_error(csv::Error::from(e)))?;
    write_tsv_to(file, rows, frequency).map_err(to_error)?;

    info!(path = %path.display(), rows = rows.len(), "wrote journal");
    Ok(())
}

/// Write the header and one row per entry to any writer.
///
/// Dates are labelled at the bucket resolution. Fields containing tabs,
/// newlines or quotes are double-quoted; everything else is written as is.
pub fn write_tsv_to<W: Write>(
    writer: W,
    rows: &[AggregatedEntry],
    frequency: Frequency,
) -> Result<(), csv::Error> {
    // The header is written by hand so an empty journal still gets one
    let mut tsv = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    tsv.write_record(HEADER)?;
    let date_format = frequency.date_format();
    for row in rows {
        tsv.serialize(TsvRow {
            date: row.date.format(date_format).to_string(),
            text: &row.text,
            photo: &row.photo,
        })?;
    }
    tsv.flush()?;

    Ok(())
}
