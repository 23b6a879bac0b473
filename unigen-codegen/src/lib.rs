//! Shared code generation utilities for the unigen union generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific emitters (e.g., `unigen-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code writing primitives (ScopedWriter, ScopeGuard, Indent)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention, etc.)

pub mod builder;
pub mod language;

pub use builder::{Indent, ScopeGuard, ScopedWriter};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
