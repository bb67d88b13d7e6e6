//! Record normalization: one raw [`Post`] into one [`NormalizedEntry`].
//!
//! Normalization is pure. It performs no I/O and never fails on a missing or
//! malformed optional field; each one resolves to an empty string:
//!
//! 1. **Date** - `timestamp`, truncated to the minute. The only hard requirement.
//! 2. **Post text** - `data[0].post` with [mojibake](repair_mojibake) repaired.
//! 3. **Attachment** - `attachments[0].data[0]`, a link or a photo, never both.
//! 4. **Tags** - `"Tagged "` followed by the names, comma separated.
//! 5. **Text** - title, post text, tags and link joined by newlines.

pub mod attachments;
pub mod text;

use chrono::{DateTime, Utc};

pub use attachments::resolve_attachment;
pub use text::{assemble_text, format_tags, repair_mojibake};

use crate::error::JournalError;
use crate::models::{NormalizedEntry, Post};

/// Normalize the post at `index` of the export.
///
/// # Errors
///
/// Returns [`JournalError::MissingTimestamp`] if the post has no timestamp;
/// without a date it cannot be bucketed or imported.
pub fn normalize(index: usize, post: &Post) -> Result<NormalizedEntry, JournalError> {
    let timestamp = post.timestamp.ok_or(JournalError::MissingTimestamp { index })?;
    let date = truncate_to_minute(timestamp);

    let post_text = post.raw_text().and_then(repair_mojibake).unwrap_or_default();
    let attachment = resolve_attachment(post);
    let tag_text = format_tags(post.tags.as_deref());
    let title = post.title.as_deref().unwrap_or_default();

    let text = assemble_text(title, &post_text, &tag_text, attachment.link_text());

    Ok(NormalizedEntry { date, text, photo: attachment.photo_uri().to_string() })
}

/// Floor to the whole minute on the epoch-seconds scale, valid across chrono's full range.
fn truncate_to_minute(date: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = date.timestamp();
    DateTime::from_timestamp(seconds - seconds.rem_euclid(60), 0).unwrap_or(date)
}
