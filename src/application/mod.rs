//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - One full render of the site (scan, render, copy, finalize)
//! - `WatchUseCase` - Poll for changes, recompile, serve the output
//! - `PublishUseCase` - Interactive draft → post transition
//! - `DraftUseCase` - Create a new draft

pub mod compile;
pub mod lifecycle;
pub mod watch;

pub use compile::{CompileResult, CompileUseCase};
pub use lifecycle::{DraftResult, DraftUseCase, PublishResult, PublishUseCase};
pub use watch::{ChangeDetector, WatchEvent, WatchUseCase};
