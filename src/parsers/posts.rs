use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::JournalError;
use crate::models::Post;
use crate::utils::validate_file_size;

/// Load every post of a Facebook `your_posts*.json` export, in file order.
///
/// The export is a single JSON array, so unlike line-oriented formats there is
/// no partial recovery: an unreadable file or a document that is not a list of
/// post objects fails the whole load. Optional fields inside a post that have
/// the wrong shape are not errors; they deserialize as absent.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, JournalError> {
    // Open once and validate the size of that handle
    let file = File::open(path)
        .map_err(|source| JournalError::Read { path: path.to_path_buf(), source })?;
    validate_file_size(&file, path)?;

    debug!(path = %path.display(), "parsing export");
    let posts = parse_posts(BufReader::new(file))
        .map_err(|source| JournalError::Parse { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), posts = posts.len(), "loaded export");
    Ok(posts)
}

/// Parse an export from any reader. Used by [`load_posts`].
pub fn parse_posts<R: Read>(reader: R) -> Result<Vec<Post>, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::DateTime;
    use tempfile::NamedTempFile;

    use super::*;

    /// Helper to create a temporary export file with given content
    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_preserves_order() {
        let content = r#"[
            {"timestamp": 3000, "title": "third in time, first in file"},
            {"timestamp": 1000, "title": "first in time"},
            {"timestamp": 2000, "title": "second in time"}
        ]"#;

        let file = create_test_file(content);
        let posts = load_posts(file.path()).unwrap();

        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].timestamp, DateTime::from_timestamp(3000, 0));
        assert_eq!(posts[1].title.as_deref(), Some("first in time"));
        assert_eq!(posts[2].timestamp, DateTime::from_timestamp(2000, 0));
    }

    #[test]
    fn test_load_empty_array() {
        let file = create_test_file("[]");
        assert!(load_posts(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_full_record() {
        let content = r#"[{
            "timestamp": 1546300800,
            "title": "Eric updated his status.",
            "data": [{"post": "Happy new year"}, {"update_timestamp": 1546300900}],
            "attachments": [{"data": [
                {"media": {"uri": "photos/1.jpg", "title": "Mobile Uploads"}}
            ]}],
            "tags": ["Ann", "Bob"]
        }]"#;

        let file = create_test_file(content);
        let posts = load_posts(file.path()).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].raw_text(), Some("Happy new year"));
        let media = posts[0].first_attachment().unwrap().media.as_ref().unwrap();
        assert_eq!(media.uri.as_deref(), Some("photos/1.jpg"));
        assert_eq!(posts[0].tags.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_posts(Path::new("/nonexistent/your_posts_1.json"));
        let err = result.unwrap_err();
        assert!(matches!(err, JournalError::Read { .. }));
        assert!(err.to_string().contains("load stage failed"));
    }

    #[test]
    fn test_load_rejects_non_array() {
        let file = create_test_file(r#"{"timestamp": 1000}"#);
        let err = load_posts(file.path()).unwrap_err();
        assert!(matches!(err, JournalError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let file = create_test_file("[{\"timestamp\": 1000},");
        assert!(matches!(load_posts(file.path()), Err(JournalError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let file = create_test_file("");
        assert!(matches!(load_posts(file.path()), Err(JournalError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_malformed_timestamp() {
        let file = create_test_file(r#"[{"timestamp": "not a date"}]"#);
        let err = load_posts(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn test_parse_posts_from_reader() {
        let posts = parse_posts(r#"[{"timestamp": 1}, {}]"#.as_bytes()).unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[1].timestamp.is_none());
    }
}
