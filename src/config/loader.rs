//! Configuration loading

use std::fs;
use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::{BloggerError, BloggerResult};

use super::types::SiteConfig;

/// Load `site.yaml`, treating a missing file as an empty configuration.
pub fn load_site_config(path: &Path) -> BloggerResult<SiteConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no site configuration, using defaults");
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|source| BloggerError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_site_config(&content, path)
}

/// Parse site configuration text. `file` only labels errors.
///
/// An empty document is an empty configuration; anything that is not a
/// mapping with the expected key types is `InvalidConfig`.
pub fn parse_site_config(content: &str, file: &Path) -> BloggerResult<SiteConfig> {
    let invalid = |message: String| BloggerError::InvalidConfig {
        file: file.to_path_buf(),
        message,
    };

    let value: Value = serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?;
    match value {
        Value::Null => Ok(SiteConfig::default()),
        Value::Mapping(_) => serde_yaml_ng::from_value(value).map_err(|e| invalid(e.to_string())),
        _ => Err(invalid("expected a mapping at the top level".to_string())),
    }
}
