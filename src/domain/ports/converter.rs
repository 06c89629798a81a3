//! MarkdownConverter port - the pluggable body-text converter
//!
//! Format semantics live entirely behind this trait; the pipeline only
//! decides which converter extensions and options apply to a post.

use serde_yaml_ng::{Mapping, Value};

/// Converter extensions and their per-extension options for one post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterOptions {
    /// Extension identifiers, site-wide first, then the post's own
    pub extensions: Vec<String>,
    /// Options keyed by extension identifier
    pub configurations: Mapping,
}

impl ConverterOptions {
    /// Union site-wide and per-post extension lists.
    ///
    /// Extension ids are appended in order with duplicates dropped; the
    /// post's configuration for an extension replaces the site's.
    pub fn merged(
        site_extensions: &[String],
        site_configurations: &Mapping,
        post_extensions: &[String],
        post_configurations: Option<&Mapping>,
    ) -> Self {
        let mut extensions: Vec<String> = Vec::new();
        for id in site_extensions.iter().chain(post_extensions) {
            if !extensions.contains(id) {
                extensions.push(id.clone());
            }
        }

        let mut configurations = site_configurations.clone();
        if let Some(post) = post_configurations {
            for (key, value) in post {
                configurations.insert(key.clone(), value.clone());
            }
        }

        Self {
            extensions,
            configurations,
        }
    }

    /// Options configured for one extension, if any.
    pub fn configuration(&self, extension: &str) -> Option<&Mapping> {
        self.configurations
            .get(extension)
            .and_then(Value::as_mapping)
    }
}

/// Converts expanded post text to HTML.
pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, text: &str, options: &ConverterOptions) -> String;
}
