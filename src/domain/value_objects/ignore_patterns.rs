//! Ignore patterns value object
//!
//! Compiles the `ignore-patterns` globs from `site.yaml` into a matcher with
//! gitignore semantics. Every directory walk in the pipeline (scan, copy,
//! change detection) consults the same matcher, so a pattern excludes a file
//! everywhere or nowhere.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled ignore globs, anchored at the project root.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile glob patterns relative to `root`.
    ///
    /// `source` is only used to label errors (normally the `site.yaml` path).
    pub fn from_globs(root: &Path, source: &Path, globs: &[String]) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (index, glob) in globs.iter().enumerate() {
            let trimmed = glob.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    path: source.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source.to_path_buf()), trimmed) {
                return Err(IgnoreError::InvalidPattern {
                    path: source.to_path_buf(),
                    index,
                    pattern: glob.clone(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a path relative to the project root should be ignored.
    ///
    /// A path outside the project root is matched by its file name only.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.is_empty() {
            return false;
        }
        if rel_path.has_root() {
            return rel_path
                .file_name()
                .map(|name| self.matcher.matched(Path::new(name), is_dir).is_ignore())
                .unwrap_or(false);
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Check a path under `root`, stripping the root first.
    pub fn is_ignored_under(&self, root: &Path, path: &Path, is_dir: bool) -> bool {
        match path.strip_prefix(root) {
            Ok(rel) => self.is_ignored(rel, is_dir),
            Err(_) => self.is_ignored(path, is_dir),
        }
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when compiling ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    /// Too many patterns configured.
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },
    /// A pattern has invalid syntax.
    InvalidPattern {
        path: PathBuf,
        index: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the matcher.
    BuildFailed(String),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPatterns { path, count, limit } => {
                write!(
                    f,
                    "ignore-patterns has {} entries, exceeds {} limit: {}",
                    count,
                    limit,
                    path.display()
                )
            }
            Self::InvalidPattern {
                path,
                index,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "Invalid ignore pattern #{} in {}: '{}' - {}",
                    index + 1,
                    path.display(),
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "Failed to build ignore matcher: {}", msg),
        }
    }
}

impl std::error::Error for IgnoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(globs: &[&str]) -> IgnorePatterns {
        let globs: Vec<String> = globs.iter().map(|g| g.to_string()).collect();
        IgnorePatterns::from_globs(Path::new("/site"), Path::new("/site/site.yaml"), &globs)
            .unwrap()
    }

    #[test]
    fn empty_patterns_match_nothing() {
        let patterns = IgnorePatterns::empty();
        assert!(!patterns.is_ignored(Path::new("anything.md"), false));
        assert!(!patterns.is_ignored(Path::new("dir/file.md"), false));
        assert!(patterns.is_empty());
    }

    #[test]
    fn swap_files_are_ignored_at_any_depth() {
        let patterns = patterns(&["*.swp"]);
        assert!(patterns.is_ignored(Path::new("posts/.hello.md.swp"), false));
        assert!(patterns.is_ignored(Path::new("a/b/c/x.swp"), false));
        assert!(!patterns.is_ignored(Path::new("posts/hello.md"), false));
    }

    #[test]
    fn directory_pattern_excludes_contents() {
        let patterns = patterns(&["assets/raw/"]);
        assert!(patterns.is_ignored(Path::new("assets/raw"), true));
        assert!(patterns.is_ignored(Path::new("assets/raw/photo.tif"), false));
        assert!(!patterns.is_ignored(Path::new("assets/css/site.css"), false));
    }

    #[test]
    fn blank_and_comment_entries_are_skipped() {
        let patterns = patterns(&["", "# note", "*.bak"]);
        assert_eq!(patterns.pattern_count(), 1);
    }

    #[test]
    fn is_ignored_under_strips_root() {
        let patterns = patterns(&["*.tmp"]);
        assert!(patterns.is_ignored_under(
            Path::new("/site"),
            Path::new("/site/posts/x.tmp"),
            false
        ));
    }

    #[test]
    fn absolute_path_outside_root_matches_by_name() {
        let patterns = patterns(&["*.tmp"]);
        assert!(patterns.is_ignored(Path::new("/elsewhere/x.tmp"), false));
        assert!(!patterns.is_ignored(Path::new("/elsewhere/x.md"), false));
    }

    #[test]
    fn too_many_patterns_error() {
        let globs: Vec<String> = (0..1100).map(|i| format!("file{}.md", i)).collect();
        let result = IgnorePatterns::from_globs(Path::new("/site"), Path::new("site.yaml"), &globs);
        assert!(matches!(result, Err(IgnoreError::TooManyPatterns { .. })));
    }
}
