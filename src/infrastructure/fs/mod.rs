//! File system helpers
//!
//! Directory walking with ignore filtering, copy-path mirroring, atomic and
//! no-clobber writes, and the application data root.

mod app_data;
mod copy;
mod local;
mod walk;

pub use app_data::{app_data_dir, BLOGGER_DATA_DIR_VAR};
pub use copy::{copy_file, mirror_dir, resolve_in_project};
pub use local::{create_new, write_atomic, write_no_clobber};
pub use walk::TreeWalker;
