//! Layout template entity

/// A layout template discovered under `templates/`.
///
/// `name` is the path relative to the templates root, with `/` separators;
/// it is both the template-engine lookup key and the output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateItem {
    pub name: String,
    pub source: String,
}

impl TemplateItem {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}
