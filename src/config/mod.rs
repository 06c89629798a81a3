//! Site configuration
//!
//! `site.yaml` at the project root is re-read at the start of every compile
//! cycle, so edits take effect without restarting `blogger run`:
//! 1. Missing file: empty configuration
//! 2. Present but malformed: `InvalidConfig`, fatal for that cycle
//!
//! [`ProjectLayout`] resolves every other path the pipeline touches.

mod layout;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use layout::{ProjectLayout, EXTENSION_MANIFEST, SITE_CONFIG_FILE};
pub use loader::{load_site_config, parse_site_config};
pub use types::{CompileOptions, SiteConfig, WatchOptions, DEFAULT_POLL_INTERVAL, DEFAULT_PORT};
