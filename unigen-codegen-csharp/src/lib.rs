//! C# emitter for closed variant unions.
//!
//! Given a [`VariantUnionDescription`], this crate emits the C# source that
//! augments the union's partial declarations: an abstract `Match`/`Switch`
//! pair on the union, one override per variant, optional
//! `JsonDerivedType` tag annotations, and an optional `Partition`
//! extension over sequences of the union.
//!
//! # Usage
//!
//! ```
//! use unigen_codegen_csharp::{EmitOptions, Emitter};
//! use unigen_ir::{TypeHeader, VariantDescription, VariantUnionDescription};
//!
//! let shape = VariantUnionDescription::new(
//!     TypeHeader::record("Shape"),
//!     vec![
//!         VariantDescription::new(TypeHeader::record("Circle"), "circle"),
//!         VariantDescription::new(TypeHeader::record("Square"), "square"),
//!     ],
//! );
//!
//! let code = Emitter::new(EmitOptions::default()).emit(&shape);
//! assert!(code.starts_with("partial record Shape\n{\n"));
//! ```
//!
//! Whole manifests go through [`Generator`], which writes one
//! `<Union>.g.cs` file per `[unions.*]` table.

mod declaration;
mod dispatch;
mod emitter;
mod generator;
mod literal;
mod lower;
mod naming;
mod partition;
mod tagging;
mod union;

pub mod files;

pub use declaration::format_header;
pub use dispatch::{DispatchSignatures, invocation, match_signature, switch_signature};
pub use emitter::{EmitOptions, Emitter, GeneratorInfo, emit};
pub use generator::{DEFAULT_OUTPUT_DIR, Generator, options_from_config};
pub use literal::string_literal;
pub use lower::{lower_manifest, lower_union};
pub use naming::{CSHARP_NAMING, escape_identifier};
pub use tagging::write_tag_annotations;
pub use unigen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
