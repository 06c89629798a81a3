//! Markdown to HTML conversion using pulldown-cmark.

use std::collections::HashSet;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use serde_yaml_ng::Value;

use crate::domain::ports::{ConverterOptions, MarkdownConverter};

/// Prefix some configurations carry on extension identifiers
const EXTENSION_PREFIX: &str = "markdown.extensions.";

const TOC_EXTENSION: &str = "toc";
const DEFAULT_TOC_SEPARATOR: &str = "-";

/// Feature switches resolved from converter extension identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Features {
    tables: bool,
    footnotes: bool,
    task_lists: bool,
    smart_punctuation: bool,
    heading_attributes: bool,
    definition_lists: bool,
    toc: bool,
}

impl Features {
    /// Enable the feature named by `id`. Returns `false` for unknown ids.
    fn enable(&mut self, id: &str) -> bool {
        let id = id.strip_prefix(EXTENSION_PREFIX).unwrap_or(id);
        match id {
            "tables" => self.tables = true,
            "footnotes" => self.footnotes = true,
            "tasklist" | "tasklists" => self.task_lists = true,
            "smarty" | "smart-punctuation" => self.smart_punctuation = true,
            "attr_list" | "heading-attributes" => self.heading_attributes = true,
            "def_list" | "definition-lists" => self.definition_lists = true,
            TOC_EXTENSION => self.toc = true,
            // always on
            "strikethrough" | "fenced_code" => {}
            "extra" => {
                self.tables = true;
                self.footnotes = true;
                self.heading_attributes = true;
                self.definition_lists = true;
            }
            _ => return false,
        }
        true
    }

    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::ENABLE_STRIKETHROUGH;
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        if self.definition_lists {
            opts.insert(Options::ENABLE_DEFINITION_LIST);
        }
        opts
    }
}

/// CommonMark converter with strikethrough always enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownConverter;

impl PulldownConverter {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownConverter for PulldownConverter {
    fn convert(&self, text: &str, options: &ConverterOptions) -> String {
        let mut features = Features::default();
        for id in &options.extensions {
            if !features.enable(id) {
                tracing::warn!(extension = %id, "unknown markdown extension, ignoring");
            }
        }

        let events: Vec<Event<'_>> = Parser::new_ext(text, features.to_pulldown_options()).collect();
        let events = if features.toc {
            assign_heading_ids(events, &toc_separator(options))
        } else {
            events
        };

        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}

fn toc_separator(options: &ConverterOptions) -> String {
    options
        .configuration(TOC_EXTENSION)
        .and_then(|cfg| cfg.get("separator"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TOC_SEPARATOR)
        .to_string()
}

/// Give every heading without an explicit id a slug of its text.
///
/// Repeated slugs get `_1`, `_2`, ... appended so anchors stay unique.
fn assign_heading_ids<'a>(mut events: Vec<Event<'a>>, separator: &str) -> Vec<Event<'a>> {
    let mut used: HashSet<String> = events
        .iter()
        .filter_map(|e| match e {
            Event::Start(Tag::Heading { id: Some(id), .. }) => Some(id.to_string()),
            _ => None,
        })
        .collect();

    let mut i = 0;
    while i < events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
            i += 1;
            continue;
        }

        let mut text = String::new();
        let mut end = i + 1;
        while end < events.len() {
            match &events[end] {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
            end += 1;
        }

        let slug = unique_slug(heading_slug(&text, separator), &mut used);
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
        i = end;
    }
    events
}

fn unique_slug(base: String, used: &mut HashSet<String>) -> String {
    let mut candidate = base.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{}_{}", base, n);
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Anchor slug for a heading: lowercase word characters, runs of spaces and
/// hyphens collapsed into `separator`.
pub fn heading_slug(text: &str, separator: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for c in text.trim().chars() {
        if c.is_whitespace() || c == '-' {
            pending_sep = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_sep && !slug.is_empty() {
                slug.push_str(separator);
            }
            pending_sep = false;
            slug.extend(c.to_lowercase());
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml_ng::Mapping;

    fn convert(text: &str, extensions: &[&str]) -> String {
        let options = ConverterOptions {
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            configurations: Mapping::new(),
        };
        PulldownConverter::new().convert(text, &options)
    }

    #[test]
    fn renders_heading() {
        assert_eq!(convert("# Hi", &[]), "<h1>Hi</h1>\n");
    }

    #[test]
    fn strikethrough_is_always_enabled() {
        assert_eq!(convert("~~gone~~", &[]), "<p><del>gone</del></p>\n");
    }

    #[test]
    fn tables_need_the_extension() {
        let table = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert!(!convert(table, &[]).contains("<table>"));
        assert!(convert(table, &["tables"]).contains("<table>"));
        assert!(convert(table, &["markdown.extensions.tables"]).contains("<table>"));
        assert!(convert(table, &["extra"]).contains("<table>"));
    }

    #[test]
    fn toc_assigns_unique_heading_ids() {
        let html = convert("# Hello World\n\n## Hello World\n\n## Other `code`", &["toc"]);
        assert!(html.contains(r#"<h1 id="hello-world">"#));
        assert!(html.contains(r#"<h2 id="hello-world_1">"#));
        assert!(html.contains(r#"<h2 id="other-code">"#));
    }

    #[test]
    fn toc_separator_is_configurable() {
        let configurations: Mapping = serde_yaml_ng::from_str("toc:\n  separator: _").unwrap();
        let options = ConverterOptions {
            extensions: vec!["toc".to_string()],
            configurations,
        };
        let html = PulldownConverter::new().convert("# A B", &options);
        assert!(html.contains(r#"id="a_b""#));
    }

    #[test]
    fn unknown_extension_is_ignored() {
        assert_eq!(convert("# Hi", &["codehilite"]), "<h1>Hi</h1>\n");
    }

    #[test]
    fn heading_slug_drops_punctuation() {
        assert_eq!(heading_slug("  What's New? -- 2024 ", "-"), "whats-new-2024");
        assert_eq!(heading_slug("", "-"), "");
    }
}
