//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub const EXPORT_FILE: &str = "your_posts_1.json";
pub const OUTPUT_FILE: &str = "journal.tsv";

/// Re-create Facebook's encoding defect: every UTF-8 byte becomes one Latin-1 char.
pub fn scramble(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

/// Builder for a temporary directory holding a posts export
pub struct ExportBuilder {
    temp_dir: TempDir,
    posts: Vec<Value>,
}

impl ExportBuilder {
    /// Create a new builder with an empty export
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, posts: Vec::new() }
    }

    /// Append a post
    pub fn with_post(mut self, post: PostBuilder) -> Self {
        self.posts.push(post.to_json());
        self
    }

    /// Write the collected posts and return the directory (consumes self)
    pub fn build(self) -> ExportDir {
        let content =
            serde_json::to_string_pretty(&Value::Array(self.posts)).expect("Failed to serialize");
        fs::write(self.temp_dir.path().join(EXPORT_FILE), content).expect("Failed to write export");
        ExportDir { temp_dir: self.temp_dir }
    }

    /// Write raw file content instead of the collected posts
    pub fn build_raw(self, content: &str) -> ExportDir {
        fs::write(self.temp_dir.path().join(EXPORT_FILE), content).expect("Failed to write export");
        ExportDir { temp_dir: self.temp_dir }
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A written export plus room for the output file
pub struct ExportDir {
    temp_dir: TempDir,
}

impl ExportDir {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn export_path(&self) -> PathBuf {
        self.temp_dir.path().join(EXPORT_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join(OUTPUT_FILE)
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read output")
    }
}

/// Builder for a single post object in Facebook's export shape
pub struct PostBuilder {
    fields: Map<String, Value>,
}

impl PostBuilder {
    /// Create a post at the given epoch seconds
    pub fn new(timestamp: i64) -> Self {
        let mut fields = Map::new();
        fields.insert("timestamp".to_string(), json!(timestamp));
        Self { fields }
    }

    /// Create a post without a timestamp
    pub fn undated() -> Self {
        Self { fields: Map::new() }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.fields.insert("title".to_string(), json!(title));
        self
    }

    /// Set the post body, scrambled the way the export stores it
    pub fn text(self, text: &str) -> Self {
        let scrambled = scramble(text);
        self.raw_text(&scrambled)
    }

    /// Set the post body exactly as given
    pub fn raw_text(mut self, text: &str) -> Self {
        self.fields.insert("data".to_string(), json!([{ "post": text }]));
        self
    }

    pub fn link(mut self, url: &str) -> Self {
        self.fields.insert(
            "attachments".to_string(),
            json!([{ "data": [{ "external_context": { "url": url } }] }]),
        );
        self
    }

    pub fn photo(mut self, uri: &str) -> Self {
        self.fields.insert(
            "attachments".to_string(),
            json!([{ "data": [{ "media": { "uri": uri, "title": "Mobile Uploads" } }] }]),
        );
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.fields.insert("tags".to_string(), json!(tags));
        self
    }

    /// Set an arbitrary field, e.g. to inject malformed values
    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Export with a spread of realistic posts over two days
pub fn realistic_export() -> ExportDir {
    ExportBuilder::new()
        .with_post(
            PostBuilder::new(1546300800)
                .title("Eric updated his status.")
                .text("Bonne année à tous"),
        )
        .with_post(
            PostBuilder::new(1546301400)
                .title("Eric shared a link.")
                .text("Worth a read")
                .link("https://example.com/article"),
        )
        .with_post(
            PostBuilder::new(1546304400)
                .title("Eric added a new photo.")
                .photo("photos/album/1.jpg"),
        )
        .with_post(
            PostBuilder::new(1546394400).title("Eric was with Ann and Bob.").tags(&["Ann", "Bob"]),
        )
        .build()
}
