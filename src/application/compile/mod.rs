//! Compile Module
//!
//! The render pipeline: one full build of the output tree.
//!
//! ## Structure
//!
//! - `result` - Result types (`CompileResult`)
//! - `use_case` - The pipeline itself (`CompileUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use blogger::application::compile::CompileUseCase;
//!
//! let use_case = CompileUseCase::new(layout, extensions);
//! let result = use_case.execute(&CompileOptions::default())?;
//! ```

mod result;
mod use_case;

pub use result::CompileResult;
pub use use_case::CompileUseCase;
