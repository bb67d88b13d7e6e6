use chrono::{DateTime, Utc};

/// Link or photo resolved from a post's first attachment. At most one of the
/// two is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Attachment {
    Link(String),
    Photo(String),
    #[default]
    None,
}

impl Attachment {
    pub fn link_text(&self) -> &str {
        match self {
            Attachment::Link(url) => url,
            _ => "",
        }
    }

    pub fn photo_uri(&self) -> &str {
        match self {
            Attachment::Photo(uri) => uri,
            _ => "",
        }
    }
}

/// A single post reduced to what the journal needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub date: DateTime<Utc>,
    pub text: String,
    pub photo: String,
}

/// One output row: every entry whose date falls into the same bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedEntry {
    pub date: DateTime<Utc>,
    pub text: String,
    pub photo: String,
}

impl AggregatedEntry {
    /// True when neither text nor photo carries anything; such rows are never written.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.photo.is_empty()
    }
}

impl From<AggregatedEntry> for NormalizedEntry {
    fn from(entry: AggregatedEntry) -> Self {
        Self { date: entry.date, text: entry.text, photo: entry.photo }
    }
}
