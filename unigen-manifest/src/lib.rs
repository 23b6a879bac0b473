//! `unigen.toml` parsing for the unigen union generator.
//!
//! A description file lists the unions to generate, in order, together with
//! optional generator settings. This crate only parses; turning a
//! [`UnionSpec`] into an emitter input happens in the language crates, which
//! know their own naming rules.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Manifest, UnigenToml, UnionSpec, VariantSpec, parse_manifest,
};
