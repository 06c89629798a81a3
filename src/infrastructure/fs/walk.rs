//! Recursive directory walking with ignore-glob filtering
//!
//! Every walk in the pipeline goes through [`TreeWalker`], so a path excluded
//! by `ignore-patterns` is invisible to the scanner, the copier and the change
//! detector alike.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::IgnorePatterns;

/// Depth-first file walker.
///
/// Entries are visited in file-name order within each directory, so two
/// walks of an unchanged tree yield the same sequence.
#[derive(Debug, Clone)]
pub struct TreeWalker<'a> {
    ignore: &'a IgnorePatterns,
    base: &'a Path,
    excluded: Vec<PathBuf>,
    strict: bool,
}

impl<'a> TreeWalker<'a> {
    /// `base` is the directory ignore patterns are anchored at (the project
    /// root), which may be an ancestor of the directory being walked.
    pub fn new(ignore: &'a IgnorePatterns, base: &'a Path) -> Self {
        Self {
            ignore,
            base,
            excluded: Vec::new(),
            strict: true,
        }
    }

    /// Never descend into `path`, whatever the ignore patterns say.
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded.push(path.into());
        self
    }

    /// Skip unreadable directories with a debug log instead of failing.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Collect every non-ignored file under `dir`.
    pub fn files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        self.walk(dir, &mut out)?;
        Ok(out)
    }

    /// Collect the non-ignored files directly inside `dir`.
    pub fn shallow_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(self
            .entries(dir)?
            .into_iter()
            .filter(|p| !p.is_dir() && !self.is_skipped(p, false))
            .collect())
    }

    /// Does the ignore matcher (or an explicit exclusion) drop `path`?
    pub fn is_skipped(&self, path: &Path, is_dir: bool) -> bool {
        self.excluded.iter().any(|e| path.starts_with(e))
            || self.ignore.is_ignored_under(self.base, path, is_dir)
    }

    fn walk(&self, dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
        let entries = match self.entries(dir) {
            Ok(entries) => entries,
            Err(e) if !self.strict => {
                tracing::debug!(path = %dir.display(), "skipping unreadable directory: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        for path in entries {
            let is_dir = path.is_dir();
            if self.is_skipped(&path, is_dir) {
                tracing::trace!(path = %path.display(), "ignored");
                continue;
            }
            if is_dir {
                self.walk(&path, out)?;
            } else {
                out.push(path);
            }
        }
        Ok(())
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }
}
