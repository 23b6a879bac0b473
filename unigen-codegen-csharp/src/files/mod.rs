//! C# file generators.

mod union_cs;

pub use union_cs::{HEADER, UnionFile};
