//! Compile Result

use std::path::PathBuf;

/// What one compile cycle produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileResult {
    /// Output root written to
    pub out_dir: PathBuf,
    /// Names of rendered posts, in render order
    pub posts: Vec<String>,
    /// Files written for templates
    pub written: Vec<PathBuf>,
    /// Templates an extension claimed
    pub skipped: Vec<String>,
    /// Files mirrored from copy paths
    pub copied: usize,
    /// Copy paths dropped by an ignore pattern
    pub ignored: Vec<String>,
}

impl CompileResult {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            ..Self::default()
        }
    }
}
