//! Data models for the Facebook export and the journal it becomes.
//!
//! - [`Post`] - one raw record of `your_posts*.json`, every field optional
//! - [`NormalizedEntry`] - a post reduced to date, text and photo
//! - [`AggregatedEntry`] - all entries of one time bucket, one output row
//! - [`Frequency`] - the bucket width
//!
//! Raw records are deserialized with the lenient helpers in the
//! `parsers::deserializers` module so that malformed optional fields read as absent.

pub mod entry;
pub mod frequency;
pub mod post;

pub use entry::{AggregatedEntry, Attachment, NormalizedEntry};
pub use frequency::{Frequency, FrequencyError};
pub use post::{AttachmentData, AttachmentGroup, ExternalContext, Media, Post, PostData, Tag};
