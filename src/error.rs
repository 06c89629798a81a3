//! Error types for Blogger
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Blogger operations
pub type BloggerResult<T> = Result<T, BloggerError>;

/// Main error type for Blogger operations
#[derive(Error, Debug)]
pub enum BloggerError {
    /// The project has no `templates/` directory
    #[error("can't work without templates: {path} does not exist")]
    TemplatesNotFound { path: PathBuf },

    /// A directory required by the operation is missing
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A content or template file could not be read during a compile
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `site.yaml` exists but is not a valid site configuration
    #[error("invalid site configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Template lookup or rendering failed
    #[error("template '{name}' failed: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// An extension hook returned an error
    #[error("extension '{name}' failed: {message}")]
    Extension { name: String, message: String },

    /// The manifest enables an extension nobody registered
    #[error("unknown extension '{name}' - no registered extension provides it")]
    UnknownExtension { name: String },

    /// `extensions.toml` could not be parsed
    #[error("invalid extension manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Installing extension requirements failed
    #[error("failed to provision extension requirements: {message}")]
    ProvisionFailed { message: String },

    /// Path escapes project boundary
    #[error("path '{path}' escapes project boundary '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Publishing would overwrite an existing post
    #[error("{path} already exists in the posts folder - refusing to overwrite it")]
    PublishCollision { path: PathBuf },

    /// There is nothing in `drafts/` to publish
    #[error("no drafts found in {path}")]
    NoDrafts { path: PathBuf },

    /// The user quit an interactive workflow
    #[error("aborted by user")]
    Aborted,

    /// Interactive input could not be read
    #[error("prompt failed: {message}")]
    Prompt { message: String },

    /// The preview server could not start
    #[error("preview server error: {message}")]
    Server { message: String },
}
