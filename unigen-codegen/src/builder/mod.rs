//! Code generation building blocks.
//!
//! - [`ScopedWriter`] - Line writer with brace-balanced, auto-closing scopes
//! - [`ScopeGuard`] - Checkpoint that closes its scopes on drop
//! - [`Indent`] - Indentation configuration

mod indent;
mod scoped_writer;

pub use indent::Indent;
pub use scoped_writer::{ScopeGuard, ScopedWriter};
