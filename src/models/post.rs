use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of a Facebook `your_posts*.json` export.
///
/// Every field is optional. `timestamp` must be well-formed when present; the
/// other fields are read leniently, so a value of the wrong shape is treated as
/// absent instead of failing the whole export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub data: Option<Vec<PostData>>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub attachments: Option<Vec<AttachmentGroup>>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostData {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub post: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttachmentGroup {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub data: Option<Vec<AttachmentData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttachmentData {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub external_context: Option<ExternalContext>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub media: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExternalContext {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub uri: Option<String>,
}

/// A tagged person. Older exports list bare names, newer ones wrap them in objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Name(String),
    Object { name: String },
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Name(name) | Tag::Object { name } => name,
        }
    }
}

impl Post {
    /// First post body in `data`, before mojibake repair.
    pub fn raw_text(&self) -> Option<&str> {
        self.data.as_ref()?.first()?.post.as_deref()
    }

    /// First attachment item, i.e. `attachments[0].data[0]`.
    pub fn first_attachment(&self) -> Option<&AttachmentData> {
        self.attachments.as_ref()?.first()?.data.as_ref()?.first()
    }
}
