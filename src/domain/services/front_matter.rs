//! Front-matter parsing
//!
//! Splits a content item into front matter and body, and independently loads
//! the first YAML document of the undivided text as metadata.

use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::domain::entities::{Metadata, Post};

/// Delimiter for front-matter sections
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Split raw text on the `---` delimiter.
///
/// With more than two segments, segment 1 is the front matter and every
/// segment from index 2 on, concatenated, is the body. Otherwise there is no
/// front matter and the body is the whole input.
pub fn split_front_matter(source: &str) -> (Option<String>, String) {
    let segments: Vec<&str> = source.split(FRONT_MATTER_DELIMITER).collect();
    if segments.len() > 2 {
        (Some(segments[1].to_string()), segments[2..].concat())
    } else {
        (None, source.to_string())
    }
}

/// Load the first YAML document of `source` as metadata.
///
/// Anything other than a mapping (a bare scalar, an empty document, a parse
/// error) yields `None`; parse errors are logged, never propagated.
pub fn parse_metadata(source: &str) -> Option<Metadata> {
    let first = serde_yaml_ng::Deserializer::from_str(source).next()?;
    match Value::deserialize(first) {
        Ok(Value::Mapping(mapping)) => Some(mapping),
        Ok(Value::Null) => None,
        Ok(other) => {
            tracing::debug!(kind = ?value_kind(&other), "front matter is not a mapping, ignoring");
            None
        }
        Err(e) => {
            tracing::error!("invalid front matter: {}", e);
            None
        }
    }
}

/// Build a [`Post`] from the raw text of one content file.
pub fn parse_post(source: &str) -> Post {
    let (front_matter, body_text) = split_front_matter(source);
    let metadata = parse_metadata(source);
    Post::new(source, front_matter, body_text, metadata)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
