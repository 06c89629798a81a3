//! Stamp-file provisioner
//!
//! Remembers the requirement list it last installed as a SHA-256 stamp in the
//! project's application data directory. A matching stamp means satisfied;
//! anything else runs the manifest's install command and rewrites the stamp
//! on success.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crate::domain::ports::{Provisioner, Requirements};
use crate::domain::value_objects::ContentHash;
use crate::error::{BloggerError, BloggerResult};
use crate::infrastructure::fs::write_atomic;

/// Stamp file name inside the project's application data directory
pub const STAMP_FILE: &str = "extensions.stamp";

/// Provisioner keyed on a stamp of the requirement list.
#[derive(Debug, Clone)]
pub struct StampProvisioner {
    stamp_path: PathBuf,
}

impl StampProvisioner {
    /// `app_data` is the per-project application data directory.
    pub fn new(app_data: impl Into<PathBuf>) -> Self {
        Self {
            stamp_path: app_data.into().join(STAMP_FILE),
        }
    }

    fn stamp_of(requirements: &Requirements) -> ContentHash {
        ContentHash::from_content(&requirements.requires.join("\n"))
    }
}

impl Provisioner for StampProvisioner {
    fn satisfied(&self, requirements: &Requirements) -> BloggerResult<bool> {
        let recorded = match fs::read_to_string(&self.stamp_path) {
            Ok(text) => text,
            Err(_) => {
                tracing::debug!(path = %self.stamp_path.display(), "no provisioning stamp");
                return Ok(false);
            }
        };
        let satisfied = recorded.trim() == Self::stamp_of(requirements).as_str();
        if !satisfied {
            tracing::info!("extension requirements changed since last install");
        }
        Ok(satisfied)
    }

    fn install(&self, requirements: &Requirements) -> BloggerResult<()> {
        let Some((program, args)) = requirements.install.split_first() else {
            return Err(BloggerError::ProvisionFailed {
                message: "requirements declared but [provision] has no install command".to_string(),
            });
        };

        tracing::info!(command = %requirements.install.join(" "), "installing extension requirements");
        let output = Command::new(program)
            .args(args)
            .current_dir(&requirements.working_dir)
            .output()
            .map_err(|e| BloggerError::ProvisionFailed {
                message: format!("could not run '{}': {}", program, e),
            })?;

        for line in String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&output.stderr).lines())
        {
            tracing::info!(target: "blogger::provision", "{}", line);
        }

        if !output.status.success() {
            return Err(BloggerError::ProvisionFailed {
                message: format!("'{}' exited with {}", program, output.status),
            });
        }

        write_atomic(
            &self.stamp_path,
            Self::stamp_of(requirements).as_str().as_bytes(),
        )?;
        Ok(())
    }
}
