//! Intermediate representation types for the unigen union generator.
//!
//! This crate describes a closed variant type ("union") the way the
//! emitters consume it. Descriptions are plain immutable values: built once
//! per generation request by whatever discovers the unions, handed to an
//! emitter by reference, and dropped afterwards.
//!
//! # Architecture
//!
//! ```text
//! unigen.toml → unigen-manifest (parsing) → unigen-ir (descriptions) → emitter
//! ```
//!
//! The IR types are designed to be:
//! - Already validated (emitters never check invariants)
//! - Order-preserving (variant order is output order)
//! - Self-contained (no dependencies beyond serde)

mod types;
mod union;

pub use types::{Accessibility, TypeHeader, TypeKind};
pub use union::{TagAnnotation, VariantDescription, VariantUnionDescription};
