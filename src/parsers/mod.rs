//! Loader for Facebook post exports
//!
//! # Error Handling Strategy
//!
//! The export is one JSON document, so failures split cleanly in two:
//!
//! - **Structural failures are fatal**: a missing or oversized file, invalid JSON, a top
//!   level that is not a list, or a malformed timestamp aborts the load with a
//!   [`JournalError`](crate::error::JournalError) naming the load stage.
//!
//! - **Field-level problems are not failures**: `title`, `data`, `attachments` and `tags`
//!   are read through [`deserializers::lenient`], so a field of the wrong shape is simply
//!   absent and the normalizer substitutes an empty string.

pub mod deserializers;
pub mod posts;

pub use posts::{load_posts, parse_posts};
