//! Post entity
//!
//! A content item read from `posts/` (or `drafts/`). Built once per scan by the
//! front-matter parser, then filled in by the render pipeline:
//! `rendered_text` after template expansion, `html` after conversion, and
//! `name`/`toc`/`title`/`date`/`extra` after metadata projection.

use serde_yaml_ng::{Mapping, Value};

/// Front-matter metadata: an ordered mapping of loosely typed YAML values.
pub type Metadata = Mapping;

/// Metadata keys the pipeline itself understands.
const TITLE_KEY: &str = "title";
const DATE_KEY: &str = "date";

/// Field names a template can read from a post besides its metadata keys.
const FIELDS: &[&str] = &[
    "name",
    "toc",
    "title",
    "date",
    "html",
    "rendered_text",
    "body_text",
    "source_text",
    "front_matter",
    "metadata",
];

/// A content item flowing through one compile cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Post {
    /// The file's text exactly as read
    pub source_text: String,
    /// Raw text between the first two `---` delimiters, if any
    pub front_matter: Option<String>,
    /// Text after the front matter
    pub body_text: String,
    /// Parsed front matter; `None` when absent or malformed
    pub metadata: Option<Metadata>,
    /// Body after template expansion
    pub rendered_text: String,
    /// Rendered text after markdown conversion
    pub html: String,
    /// Path relative to the content root, `/`-separated
    pub name: String,
    /// Anchor-friendly identifier derived from the title or file name
    pub toc: String,
    /// Projected `title` metadata
    pub title: Option<String>,
    /// Projected `date` metadata
    pub date: Option<String>,
    /// Every other metadata key, projected for template lookup
    pub extra: Metadata,
}

impl Post {
    pub fn new(
        source_text: impl Into<String>,
        front_matter: Option<String>,
        body_text: impl Into<String>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            front_matter,
            body_text: body_text.into(),
            metadata,
            ..Self::default()
        }
    }

    /// Read a metadata value as plain text (strings, numbers, booleans).
    pub fn meta_str(&self, key: &str) -> Option<String> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(value_to_plain_string)
    }

    /// Read a metadata value as a list of strings (non-strings are skipped).
    pub fn meta_list(&self, key: &str) -> Vec<String> {
        match self.metadata.as_ref().and_then(|m| m.get(key)) {
            Some(Value::Sequence(items)) => items.iter().filter_map(value_to_plain_string).collect(),
            Some(other) => value_to_plain_string(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Read a metadata value as a nested mapping.
    pub fn meta_mapping(&self, key: &str) -> Option<&Mapping> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(Value::as_mapping)
    }

    /// Set a metadata key, creating the mapping if the post had none.
    pub fn set_meta(&mut self, key: &str, value: impl Into<Value>) {
        self.metadata
            .get_or_insert_with(Mapping::new)
            .insert(Value::String(key.to_string()), value.into());
    }

    /// Derive `toc` from the declared title, falling back to the file name.
    pub fn compute_toc(&mut self) {
        let base = match self.meta_str(TITLE_KEY) {
            Some(title) => title,
            None => self
                .name
                .strip_suffix(".md")
                .unwrap_or(&self.name)
                .to_string(),
        };
        self.toc = base.replace(' ', "-");
    }

    /// Project metadata onto the post's own fields.
    ///
    /// `title` and `date` become typed fields; every other key lands in
    /// `extra`, where [`Post::lookup`] finds it.
    pub fn project_metadata(&mut self) {
        self.title = self.meta_str(TITLE_KEY);
        self.date = self.meta_str(DATE_KEY);
        self.extra = self
            .metadata
            .iter()
            .flatten()
            .filter(|(k, _)| !matches!(k.as_str(), Some(TITLE_KEY) | Some(DATE_KEY)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
    }

    /// Resolve a template attribute (`post.<key>`).
    ///
    /// Fixed fields win over metadata keys of the same name.
    pub fn lookup(&self, key: &str) -> Option<Value> {
        let text = |s: &str| Some(Value::String(s.to_string()));
        match key {
            "name" => text(&self.name),
            "toc" => text(&self.toc),
            "html" => text(&self.html),
            "rendered_text" => text(&self.rendered_text),
            "body_text" => text(&self.body_text),
            "source_text" => text(&self.source_text),
            "front_matter" => Some(
                self.front_matter
                    .as_deref()
                    .map(|s| Value::String(s.to_string()))
                    .unwrap_or(Value::Null),
            ),
            "metadata" => Some(
                self.metadata
                    .clone()
                    .map(Value::Mapping)
                    .unwrap_or(Value::Null),
            ),
            "title" => self.title.as_deref().and_then(text),
            "date" => self.date.as_deref().and_then(text),
            other => self.extra.get(other).cloned(),
        }
    }

    /// Every key [`Post::lookup`] can resolve, fixed fields first.
    pub fn keys(&self) -> Vec<String> {
        FIELDS
            .iter()
            .map(|f| f.to_string())
            .chain(self.extra.keys().filter_map(value_to_plain_string))
            .collect()
    }
}

/// Render a scalar YAML value as plain text.
pub(crate) fn value_to_plain_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => value_to_plain_string(&tagged.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_meta(yaml: &str) -> Post {
        let metadata: Mapping = serde_yaml_ng::from_str(yaml).unwrap();
        Post::new("", None, "", Some(metadata))
    }

    #[test]
    fn toc_uses_title_with_hyphens() {
        let mut post = post_with_meta("title: Hello Big World");
        post.name = "hello.md".to_string();
        post.compute_toc();
        assert_eq!(post.toc, "Hello-Big-World");
    }

    #[test]
    fn toc_falls_back_to_file_name() {
        let mut post = Post::new("", None, "", None);
        post.name = "my dream.md".to_string();
        post.compute_toc();
        assert_eq!(post.toc, "my-dream");
    }

    #[test]
    fn projection_splits_known_and_extra_keys() {
        let mut post = post_with_meta("title: Hi\ndate: 2024-01-02\ntags: [a, b]\nauthor: Sam");
        post.project_metadata();

        assert_eq!(post.title.as_deref(), Some("Hi"));
        assert_eq!(post.date.as_deref(), Some("2024-01-02"));
        assert_eq!(post.extra.len(), 2);
        assert_eq!(
            post.lookup("author"),
            Some(Value::String("Sam".to_string()))
        );
        assert!(matches!(post.lookup("tags"), Some(Value::Sequence(_))));
    }

    #[test]
    fn fixed_fields_shadow_metadata() {
        let mut post = post_with_meta("html: sneaky");
        post.html = "<p>real</p>".to_string();
        post.project_metadata();
        assert_eq!(
            post.lookup("html"),
            Some(Value::String("<p>real</p>".to_string()))
        );
    }

    #[test]
    fn missing_metadata_is_a_valid_state() {
        let mut post = Post::new("body", None, "body", None);
        post.project_metadata();
        assert_eq!(post.title, None);
        assert!(post.extra.is_empty());
        assert_eq!(post.lookup("metadata"), Some(Value::Null));
        assert_eq!(post.lookup("unknown"), None);
    }

    #[test]
    fn meta_list_accepts_scalar_or_sequence() {
        let post = post_with_meta("one: tables\nmany: [toc, footnotes]");
        assert_eq!(post.meta_list("one"), vec!["tables"]);
        assert_eq!(post.meta_list("many"), vec!["toc", "footnotes"]);
        assert!(post.meta_list("none").is_empty());
    }

    #[test]
    fn set_meta_creates_mapping() {
        let mut post = Post::new("", None, "", None);
        post.set_meta("word_count", 12u64);
        assert_eq!(post.meta_str("word_count").as_deref(), Some("12"));
    }
}
