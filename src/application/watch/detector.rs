//! Content-hash change detection
//!
//! The detector owns a snapshot of `absolute path → content hash` for every
//! readable, non-ignored file under its root. Each [`ChangeDetector::dirty`]
//! call rescans the tree and overwrites the snapshot, so it reports a given
//! edit exactly once. Files that vanish are dropped silently; a deletion on
//! its own never makes the tree dirty.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, IgnorePatterns};
use crate::infrastructure::fs::TreeWalker;

#[derive(Debug)]
pub struct ChangeDetector {
    root: PathBuf,
    ignore: IgnorePatterns,
    excluded: Vec<PathBuf>,
    snapshot: HashMap<PathBuf, ContentHash>,
}

impl ChangeDetector {
    /// A detector with an empty snapshot: the first check reports dirty if
    /// the tree holds any file at all.
    pub fn new(root: impl Into<PathBuf>, ignore: IgnorePatterns) -> Self {
        Self {
            root: canonical(&root.into()),
            ignore,
            excluded: Vec::new(),
            snapshot: HashMap::new(),
        }
    }

    /// Take the first snapshot now, so only later edits count as changes.
    pub fn primed(mut self) -> Self {
        self.dirty();
        self
    }

    /// Never track files under `path` (the output directory, typically).
    pub fn exclude(mut self, path: impl AsRef<Path>) -> Self {
        self.excluded.push(canonical(path.as_ref()));
        self
    }

    /// Swap in freshly loaded ignore patterns. The snapshot is kept.
    pub fn set_ignore(&mut self, ignore: IgnorePatterns) {
        self.ignore = ignore;
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files in the snapshot.
    pub fn tracked(&self) -> usize {
        self.snapshot.len()
    }

    /// Rescan the tree and report whether any file is new or changed since
    /// the previous call.
    pub fn dirty(&mut self) -> bool {
        let files = {
            let walker = self
                .excluded
                .iter()
                .fold(TreeWalker::new(&self.ignore, &self.root).lenient(), |w, e| {
                    w.exclude(e)
                });
            match walker.files(&self.root) {
                Ok(files) => files,
                Err(e) => {
                    tracing::debug!(path = %self.root.display(), "cannot scan for changes: {}", e);
                    return false;
                }
            }
        };

        let mut dirty = false;
        for path in files {
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::trace!(path = %path.display(), "skipping unreadable file: {}", e);
                    continue;
                }
            };
            let hash = ContentHash::from_bytes(&bytes);
            let changed = self
                .snapshot
                .get(&path)
                .map_or(true, |previous| *previous != hash);
            if changed {
                tracing::debug!(path = %path.display(), "changed");
                self.snapshot.insert(path, hash);
                dirty = true;
            }
        }
        dirty
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
