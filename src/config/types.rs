//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_yaml_ng::Mapping;

use crate::domain::value_objects::IgnorePatterns;
use crate::error::{BloggerError, BloggerResult};

/// Port the preview server listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 8000;

/// How often the watch loop polls for changes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Contents of `site.yaml`.
///
/// The four recognized keys drive the pipeline; everything else is kept in
/// `extra` so templates can read `site.title`, `site.author` and so on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Globs excluded from every scan, copy and change check
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Converter extension identifiers enabled for every post
    #[serde(default)]
    pub markdown_extensions: Vec<String>,

    /// Per-extension converter options
    #[serde(default)]
    pub markdown_extensions_configurations: Mapping,

    /// Files or directories mirrored verbatim into the output root
    #[serde(default)]
    pub copy_paths: Vec<String>,

    /// Every key the pipeline does not interpret
    #[serde(flatten)]
    pub extra: Mapping,
}

impl SiteConfig {
    /// Compile `ignore-patterns` against the project root.
    ///
    /// `source` labels errors, normally the `site.yaml` path.
    pub fn ignore_matcher(&self, root: &Path, source: &Path) -> BloggerResult<IgnorePatterns> {
        IgnorePatterns::from_globs(root, source, &self.ignore_patterns).map_err(|e| {
            BloggerError::InvalidConfig {
                file: source.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}

/// Options for one compile cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Merge `drafts/` into the post set
    pub include_drafts: bool,
}

/// Options for the watch/serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub compile: CompileOptions,
    /// Pause between dirtiness checks
    pub interval: Duration,
    /// Preview server port
    pub port: u16,
    /// Start the preview server alongside the loop
    pub serve: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            compile: CompileOptions::default(),
            interval: DEFAULT_POLL_INTERVAL,
            port: DEFAULT_PORT,
            serve: true,
        }
    }
}
