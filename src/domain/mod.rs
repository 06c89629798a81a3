//! Domain Layer
//!
//! The core of Blogger: content items, templates, and the ports the
//! pipeline talks through.
//!
//! ## Structure
//!
//! - `entities/` - Content items (`Post`) and layout templates (`TemplateItem`)
//! - `value_objects/` - Immutable value types (hashes, ignore globs, slugs, dates)
//! - `services/` - Pure transformations (front-matter splitting)
//! - `ports/` - Interface definitions implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
