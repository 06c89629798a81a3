//! Project directory layout

use std::path::{Path, PathBuf};

use crate::infrastructure::fs::app_data_dir;

/// Site configuration file name at the project root
pub const SITE_CONFIG_FILE: &str = "site.yaml";

/// Extension manifest file name
pub const EXTENSION_MANIFEST: &str = "extensions.toml";

const TEMPLATES_DIR: &str = "templates";
const POSTS_DIR: &str = "posts";
const DRAFTS_DIR: &str = "drafts";
const EXTENSIONS_DIR: &str = "extensions";
const OUTPUT_DIR: &str = "_site";

/// Resolved paths of one blog project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub templates: PathBuf,
    pub posts: PathBuf,
    pub drafts: PathBuf,
    pub site_config: PathBuf,
    pub out_dir: PathBuf,
}

impl ProjectLayout {
    /// Lay out a project rooted at `root`, writing to the default output
    /// directory under the application data root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let out_dir = Self::default_out_dir(&root);
        Self::with_out_dir(root, out_dir)
    }

    /// Lay out a project with an explicit output directory.
    pub fn with_out_dir(root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            templates: root.join(TEMPLATES_DIR),
            posts: root.join(POSTS_DIR),
            drafts: root.join(DRAFTS_DIR),
            site_config: root.join(SITE_CONFIG_FILE),
            out_dir: out_dir.into(),
            root,
        }
    }

    /// Per-project application data: `<data root>/<project dir name>`.
    pub fn app_data(&self) -> PathBuf {
        Self::app_data_for(&self.root)
    }

    /// `extensions.toml` at the root, else `extensions/extensions.toml`.
    pub fn extension_manifest(&self) -> Option<PathBuf> {
        [
            self.root.join(EXTENSION_MANIFEST),
            self.root.join(EXTENSIONS_DIR).join(EXTENSION_MANIFEST),
        ]
        .into_iter()
        .find(|p| p.is_file())
    }

    /// Is the output directory inside the project tree?
    pub fn out_dir_in_project(&self) -> bool {
        self.out_dir.starts_with(&self.root)
    }

    fn app_data_for(root: &Path) -> PathBuf {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "site".to_string());
        app_data_dir().join(name)
    }

    fn default_out_dir(root: &Path) -> PathBuf {
        Self::app_data_for(root).join(OUTPUT_DIR)
    }
}
