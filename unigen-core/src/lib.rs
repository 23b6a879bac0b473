//! Core utilities for the unigen union generator.
//!
//! This crate provides the small, language-agnostic helpers shared by the
//! rest of the workspace: identifier case conversion and generated-file
//! output.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
