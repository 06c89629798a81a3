//! Copy-path mirroring
//!
//! Directories are merged into the destination (existing entries are kept,
//! same-named files replaced); nothing is ever deleted from the output root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{BloggerError, BloggerResult};

use super::walk::TreeWalker;

/// Resolve a project-relative path, rejecting absolute paths and any path
/// that climbs out of `root`.
pub fn resolve_in_project(root: &Path, rel: &str) -> BloggerResult<PathBuf> {
    let rel_path = Path::new(rel);
    let escapes = rel_path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(BloggerError::PathEscape {
            path: rel_path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    Ok(root.join(rel_path))
}

/// Copy one file, creating the destination's parent directories.
pub fn copy_file(src: &Path, dst: &Path) -> BloggerResult<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst).map_err(|source| BloggerError::ReadFailed {
        path: src.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Mirror every non-ignored file under `src` into `dst`.
///
/// Returns the number of files copied.
pub fn mirror_dir(walker: &TreeWalker<'_>, src: &Path, dst: &Path) -> BloggerResult<usize> {
    let files = walker
        .files(src)
        .map_err(|source| BloggerError::ReadFailed {
            path: src.to_path_buf(),
            source,
        })?;

    fs::create_dir_all(dst)?;
    for file in &files {
        let rel = file.strip_prefix(src).map_err(|_| BloggerError::PathEscape {
            path: file.clone(),
            root: src.to_path_buf(),
        })?;
        copy_file(file, &dst.join(rel))?;
    }
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::IgnorePatterns;
    use tempfile::tempdir;

    #[test]
    fn resolve_rejects_escapes() {
        let root = Path::new("/blog");
        assert_eq!(
            resolve_in_project(root, "assets/css").unwrap(),
            PathBuf::from("/blog/assets/css")
        );
        assert!(matches!(
            resolve_in_project(root, "../secrets"),
            Err(BloggerError::PathEscape { .. })
        ));
        assert!(matches!(
            resolve_in_project(root, "/etc/passwd"),
            Err(BloggerError::PathEscape { .. })
        ));
    }

    #[test]
    fn mirror_merges_and_honors_ignores() {
        let project = tempdir().unwrap();
        let out = tempdir().unwrap();
        let assets = project.path().join("assets");
        fs::create_dir_all(assets.join("css")).unwrap();
        fs::write(assets.join("css/site.css"), "body{}").unwrap();
        fs::write(assets.join("logo.psd"), "raw").unwrap();
        fs::create_dir_all(out.path().join("assets")).unwrap();
        fs::write(out.path().join("assets/keep.txt"), "old").unwrap();

        let ignore = IgnorePatterns::from_globs(
            project.path(),
            &project.path().join("site.yaml"),
            &["*.psd".to_string()],
        )
        .unwrap();
        let walker = TreeWalker::new(&ignore, project.path());
        let copied = mirror_dir(&walker, &assets, &out.path().join("assets")).unwrap();

        assert_eq!(copied, 1);
        assert!(out.path().join("assets/css/site.css").exists());
        assert!(!out.path().join("assets/logo.psd").exists());
        assert!(out.path().join("assets/keep.txt").exists());
    }
}
