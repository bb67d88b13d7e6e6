use crate::models::{Attachment, Post};

/// Resolve the first attachment item of a post.
///
/// A shared link wins over media; an item with neither, or no attachment at
/// all, resolves to [`Attachment::None`].
pub fn resolve_attachment(post: &Post) -> Attachment {
    let Some(item) = post.first_attachment() else {
        return Attachment::None;
    };

    if let Some(url) = item.external_context.as_ref().and_then(|ctx| ctx.url.as_ref()) {
        return Attachment::Link(url.clone());
    }
    if let Some(uri) = item.media.as_ref().and_then(|media| media.uri.as_ref()) {
        return Attachment::Photo(uri.clone());
    }

    Attachment::None
}
