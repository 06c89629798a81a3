//! Local file writes
//!
//! Rendered pages are written through a temp file in the destination
//! directory and renamed into place, so the preview server never serves a
//! half-written page. Lifecycle writes must not replace an existing file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `content` to `path` atomically, creating parent directories.
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut tmp = temp_beside(path)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write `content` to `path` only if nothing exists there yet.
///
/// The content is staged in a temp file first, so a collision leaves no
/// partial file behind. Fails with `AlreadyExists` on collision.
pub fn write_no_clobber(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut tmp = temp_beside(path)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create `path` exclusively and write `content` into it.
///
/// Fails with `AlreadyExists` if the file is already there, which makes the
/// check-and-create a single step.
pub fn create_new(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content)?;
    Ok(())
}

fn temp_beside(path: &Path) -> io::Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    NamedTempFile::new_in(parent)
}
