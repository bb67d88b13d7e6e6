use crate::models::Tag;

const TAG_PREFIX: &str = "Tagged ";

/// Undo Facebook's export mojibake.
///
/// The export writes UTF-8 bytes as if each byte were a Latin-1 character, so
/// `é` arrives as `Ã©`. Mapping every char back to its byte and decoding the
/// bytes as UTF-8 restores the original text.
///
/// Returns `None` when the text cannot have come from that transform: a char
/// above U+00FF, or bytes that are not valid UTF-8.
pub fn repair_mojibake(scrambled: &str) -> Option<String> {
    let bytes = scrambled
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

/// `"Tagged Ann, Bob"` for present tags, empty when the field is absent.
pub fn format_tags(tags: Option<&[Tag]>) -> String {
    match tags {
        Some(tags) => {
            let names: Vec<&str> = tags.iter().map(Tag::name).collect();
            format!("{}{}", TAG_PREFIX, names.join(", "))
        }
        None => String::new(),
    }
}

/// Join the text parts of an entry, one per line, in fixed order.
pub fn assemble_text(title: &str, post_text: &str, tag_text: &str, link_text: &str) -> String {
    let capacity = title.len() + post_text.len() + tag_text.len() + link_text.len() + 3;
    let mut text = String::with_capacity(capacity);
    for (i, part) in [title, post_text, tag_text, link_text].into_iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(part);
    }
    text
}
