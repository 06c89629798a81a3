//! Watch event types

use serde::Serialize;

use crate::application::compile::CompileResult;

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { root: String, out_dir: String },
    /// Preview server is accepting requests
    ServerStarted { url: String },
    /// A poll found new or modified files
    ChangeDetected,
    /// Compile started
    CompileStarted,
    /// Compile finished without error
    CompileComplete {
        posts: usize,
        written: usize,
        skipped: usize,
        copied: usize,
    },
    /// A compile cycle failed; the loop keeps watching
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    pub fn compile_complete(result: &CompileResult) -> Self {
        Self::CompileComplete {
            posts: result.posts.len(),
            written: result.written.len(),
            skipped: result.skipped.len(),
            copied: result.copied,
        }
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
