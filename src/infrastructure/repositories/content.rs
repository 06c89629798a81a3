//! Content repository scanner
//!
//! Walks a directory tree, drops ignored paths, and maps each remaining file
//! to a value keyed by its `/`-separated path relative to a naming root.
//! An unreadable file aborts the scan: a compile never reports success over
//! a partially read tree.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::domain::entities::{Post, TemplateItem};
use crate::domain::services::parse_post;
use crate::error::{BloggerError, BloggerResult};
use crate::infrastructure::fs::TreeWalker;

/// Scan result: name → value, iterated in name order.
pub type ContentSet<T> = BTreeMap<String, T>;

/// Suffix content items must carry
pub const CONTENT_SUFFIX: &str = ".md";

/// Scanner over one project tree.
pub struct ContentRepository<'a> {
    walker: TreeWalker<'a>,
}

impl<'a> ContentRepository<'a> {
    pub fn new(walker: TreeWalker<'a>) -> Self {
        Self { walker }
    }

    /// Scan `root`, naming entries relative to `naming_root`.
    ///
    /// When `suffix` is given, only file names ending with it are included.
    /// Each file's text goes through `deserialize` before being stored.
    pub fn scan<T, F>(
        &self,
        root: &Path,
        naming_root: &Path,
        suffix: Option<&str>,
        deserialize: F,
    ) -> BloggerResult<ContentSet<T>>
    where
        F: Fn(&str) -> T,
    {
        let files = self
            .walker
            .files(root)
            .map_err(|source| BloggerError::ReadFailed {
                path: root.to_path_buf(),
                source,
            })?;

        let mut out = ContentSet::new();
        for path in files {
            if let Some(suffix) = suffix {
                let matches = path
                    .file_name()
                    .map(|n| n.to_string_lossy().ends_with(suffix))
                    .unwrap_or(false);
                if !matches {
                    continue;
                }
            }
            let text = read_text(&path)?;
            out.insert(content_name(&path, naming_root), deserialize(&text));
        }
        Ok(out)
    }

    /// Every template under `dir`, keyed by its relative path.
    pub fn templates(&self, dir: &Path) -> BloggerResult<ContentSet<TemplateItem>> {
        let raw = self.scan(dir, dir, None, |text| text.to_string())?;
        Ok(raw
            .into_iter()
            .map(|(name, source)| {
                let item = TemplateItem::new(name.clone(), source);
                (name, item)
            })
            .collect())
    }

    /// Every `.md` content item under `dir`, parsed into posts.
    pub fn posts(&self, dir: &Path) -> BloggerResult<ContentSet<Post>> {
        self.scan(dir, dir, Some(CONTENT_SUFFIX), parse_post)
    }
}

fn read_text(path: &Path) -> BloggerResult<String> {
    let bytes = fs::read(path).map_err(|source| BloggerError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| BloggerError::ReadFailed {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

/// `/`-separated path of `path` relative to `naming_root`.
fn content_name(path: &Path, naming_root: &Path) -> String {
    let rel = path.strip_prefix(naming_root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::IgnorePatterns;
    use tempfile::tempdir;

    fn write(path: &Path, text: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn scan_filters_by_suffix_and_names_relative() {
        let dir = tempdir().unwrap();
        let posts = dir.path().join("posts");
        write(&posts.join("hello.md"), "---\ntitle: Hello\n---\n# Hi");
        write(&posts.join("2024/trip.md"), "no front matter");
        write(&posts.join("image.png"), "binary-ish");

        let ignore = IgnorePatterns::empty();
        let repo = ContentRepository::new(TreeWalker::new(&ignore, dir.path()));
        let found = repo.posts(&posts).unwrap();

        let names: Vec<_> = found.keys().cloned().collect();
        assert_eq!(names, vec!["2024/trip.md", "hello.md"]);
        assert_eq!(found["hello.md"].meta_str("title").as_deref(), Some("Hello"));
        assert_eq!(found["2024/trip.md"].metadata, None);
    }

    #[test]
    fn scan_without_suffix_keeps_everything() {
        let dir = tempdir().unwrap();
        let templates = dir.path().join("templates");
        write(&templates.join("index.html"), "{{ posts }}");
        write(&templates.join("feeds/atom.xml"), "<feed/>");

        let ignore = IgnorePatterns::empty();
        let repo = ContentRepository::new(TreeWalker::new(&ignore, dir.path()));
        let found = repo.templates(&templates).unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found["feeds/atom.xml"].source, "<feed/>");
    }

    #[test]
    fn ignored_files_are_not_scanned() {
        let dir = tempdir().unwrap();
        let posts = dir.path().join("posts");
        write(&posts.join("keep.md"), "a");
        write(&posts.join("skip.md"), "b");

        let ignore = IgnorePatterns::from_globs(
            dir.path(),
            &dir.path().join("site.yaml"),
            &["skip.md".to_string()],
        )
        .unwrap();
        let repo = ContentRepository::new(TreeWalker::new(&ignore, dir.path()));

        let names: Vec<_> = repo.posts(&posts).unwrap().into_keys().collect();
        assert_eq!(names, vec!["keep.md"]);
    }

    #[test]
    fn non_utf8_content_is_fatal() {
        let dir = tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let ignore = IgnorePatterns::empty();
        let repo = ContentRepository::new(TreeWalker::new(&ignore, dir.path()));
        assert!(matches!(
            repo.posts(&posts),
            Err(BloggerError::ReadFailed { .. })
        ));
    }
}
