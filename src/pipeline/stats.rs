use chrono::{DateTime, Utc};

use crate::models::{Attachment, Post};
use crate::normalizer::{repair_mojibake, resolve_attachment};

/// What an export contains, without converting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub posts: usize,
    pub with_text: usize,
    pub links: usize,
    pub photos: usize,
    pub tagged: usize,
    pub undated: usize,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

impl ExportStats {
    pub fn collect(posts: &[Post]) -> Self {
        let mut stats = Self { posts: posts.len(), ..Self::default() };

        for post in posts {
            if post.raw_text().and_then(repair_mojibake).is_some_and(|text| !text.is_empty()) {
                stats.with_text += 1;
            }
            match resolve_attachment(post) {
                Attachment::Link(_) => stats.links += 1,
                Attachment::Photo(_) => stats.photos += 1,
                Attachment::None => {}
            }
            if post.tags.as_ref().is_some_and(|tags| !tags.is_empty()) {
                stats.tagged += 1;
            }

            match post.timestamp {
                Some(ts) => {
                    stats.oldest = Some(stats.oldest.map_or(ts, |oldest| oldest.min(ts)));
                    stats.newest = Some(stats.newest.map_or(ts, |newest| newest.max(ts)));
                }
                None => stats.undated += 1,
            }
        }

        stats
    }
}
