use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use blogger::config::ProjectLayout;

/// Resolve the project root from `-C`.
///
/// A directory that does not exist falls back to the current directory with
/// a warning, so `blogger -C typo run` still does something sensible.
pub fn resolve_root(directory: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let root = match directory {
        Some(dir) if dir.exists() => absolute(&cwd, dir),
        Some(dir) => {
            tracing::warn!(
                "{} does not exist, using the current directory instead",
                dir.display()
            );
            cwd
        }
        None => cwd,
    };
    Ok(root)
}

/// Resolve the project layout, honouring an `--output-dir` override.
pub fn resolve_layout(directory: Option<&Path>, output_dir: Option<&Path>) -> Result<ProjectLayout> {
    let root = resolve_root(directory)?;
    Ok(match output_dir {
        Some(out) => {
            let cwd = std::env::current_dir().context("cannot determine the current directory")?;
            ProjectLayout::with_out_dir(&root, absolute(&cwd, out))
        }
        None => ProjectLayout::new(&root),
    })
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}
