//! Journal import boundary.
//!
//! The pipeline hands every normalized entry to an [`EntrySink`] as soon as it
//! is produced, before aggregation. Sinks are best effort: an
//! [`ImportError`] is logged and counted by the pipeline and never stops it.

pub mod dayone;

pub use dayone::{DEFAULT_DAYONE_BIN, DayOneImporter, DryRunImporter};

use crate::error::ImportError;
use crate::models::NormalizedEntry;

/// Receives entries one at a time, in export order.
pub trait EntrySink {
    fn import(&mut self, entry: &NormalizedEntry) -> Result<(), ImportError>;
}
