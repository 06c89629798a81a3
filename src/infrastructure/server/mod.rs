//! Local preview server

mod preview;

pub use preview::{PreviewHandle, PreviewServer, PREVIEW_HOST};
