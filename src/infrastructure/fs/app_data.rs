//! Application data root with test isolation support.
//!
//! Per-project state (default output directory, provisioning stamps) lives
//! under `<local data dir>/blogger/<project>`. `BLOGGER_DATA_DIR` replaces the
//! `<local data dir>/blogger` part, which keeps tests and CI away from the
//! real user profile.

use std::path::PathBuf;

/// Environment variable overriding the application data root.
pub const BLOGGER_DATA_DIR_VAR: &str = "BLOGGER_DATA_DIR";

const APP_DIR: &str = "blogger";

/// Get the application data root.
///
/// Falls back to the system temp directory when the platform reports no
/// local data directory.
pub fn app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(BLOGGER_DATA_DIR_VAR).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_respects_override() {
        let fake = "/test/fake/data";

        // SAFETY: This test is single-threaded and we restore the env var after
        unsafe {
            std::env::set_var(BLOGGER_DATA_DIR_VAR, fake);
        }
        let result = app_data_dir();
        unsafe {
            std::env::remove_var(BLOGGER_DATA_DIR_VAR);
        }

        assert_eq!(result, PathBuf::from(fake));
    }
}
