//! `extensions.toml` parsing

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::Requirements;
use crate::error::{BloggerError, BloggerResult};

/// Which extensions a project enables and what they need installed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionManifest {
    /// Extension names, in hook invocation order
    #[serde(default)]
    pub enabled: Vec<String>,

    #[serde(default)]
    pub provision: ProvisionSection,
}

/// `[provision]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionSection {
    /// Opaque requirement strings
    #[serde(default)]
    pub requires: Vec<String>,

    /// Program and arguments run when requirements are not satisfied
    #[serde(default)]
    pub install: Vec<String>,
}

impl ExtensionManifest {
    pub fn load(path: &Path) -> BloggerResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| BloggerError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest text. `file` only labels errors.
    pub fn parse(content: &str, file: &Path) -> BloggerResult<Self> {
        toml::from_str(content).map_err(|e| BloggerError::InvalidManifest {
            file: file.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Requirements to provision, with installs running in `working_dir`.
    pub fn requirements(&self, working_dir: &Path) -> Requirements {
        Requirements {
            requires: self.provision.requires.clone(),
            install: self.provision.install.clone(),
            working_dir: working_dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let manifest = ExtensionManifest::parse(
            r#"
enabled = ["reading-time", "sitemap"]

[provision]
requires = ["tool >= 1.2"]
install = ["sh", "-c", "echo installing"]
"#,
            Path::new("extensions.toml"),
        )
        .unwrap();

        assert_eq!(manifest.enabled, vec!["reading-time", "sitemap"]);
        assert_eq!(manifest.provision.requires, vec!["tool >= 1.2"]);
        assert_eq!(manifest.provision.install.len(), 3);
    }

    #[test]
    fn empty_manifest_enables_nothing() {
        let manifest = ExtensionManifest::parse("", Path::new("extensions.toml")).unwrap();
        assert_eq!(manifest, ExtensionManifest::default());
        assert!(manifest.requirements(Path::new(".")).is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ExtensionManifest::parse("enable = [\"x\"]", Path::new("extensions.toml"))
            .unwrap_err();
        assert!(matches!(err, BloggerError::InvalidManifest { .. }));
    }
}
