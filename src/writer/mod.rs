//! Tab-separated journal output.

pub mod tsv;

pub use tsv::{write_tsv, write_tsv_to};
