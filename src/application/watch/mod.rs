//! Watch Use Case
//!
//! Keeps the output tree live: compile once, then poll the project for
//! content changes and recompile the whole site whenever something changed,
//! optionally serving the output directory for preview.
//!
//! ## Architecture
//!
//! - `ChangeDetector` - Content-hash snapshot of the project tree
//! - `WatchUseCase` - Poll loop, preview server lifetime, error containment
//! - `WatchEvent` - Events emitted during the loop (NDJSON-serializable)
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(compile, WatchOptions::default());
//! use_case.start(running, |event| { ... })?;
//! ```

mod detector;
mod event;
mod use_case;


pub use detector::ChangeDetector;
pub use event::WatchEvent;
pub use use_case::WatchUseCase;
