//! Indentation-tracking writer with brace-balanced scopes.

use std::ops::{Deref, DerefMut};

use super::Indent;

/// Line-oriented code writer whose `{ ... }` blocks always balance.
///
/// [`open_scope`](Self::open_scope) writes `{` and indents. Scopes are never
/// closed by hand: a [`ScopeGuard`] obtained from
/// [`auto_close_scopes`](Self::auto_close_scopes) closes every scope opened
/// after it, innermost first, when it is dropped. Any scope still open when
/// the writer is finished is closed by [`build`](Self::build).
///
/// # Example
///
/// ```
/// use unigen_codegen::builder::ScopedWriter;
///
/// let mut writer = ScopedWriter::csharp();
/// {
///     let mut scope = writer.auto_close_scopes();
///     scope.push_line("namespace Geometry").open_scope();
///     scope.push_line("partial record Shape").open_scope();
///     scope.push_line("// body");
/// }
/// writer.push_line("// after");
///
/// assert_eq!(
///     writer.build(),
///     "namespace Geometry\n{\n    partial record Shape\n    {\n        // body\n    }\n}\n// after\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ScopedWriter {
    indent_level: usize,
    open_scopes: usize,
    indent: Indent,
    buffer: String,
}

impl ScopedWriter {
    /// Create a new writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            open_scopes: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new writer with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Write `{` and indent everything up to the matching close.
    pub fn open_scope(&mut self) -> &mut Self {
        self.push_line("{");
        self.indent_level += 1;
        self.open_scopes += 1;
        self
    }

    /// Start a checkpoint: scopes opened through the returned guard are
    /// closed when it drops.
    pub fn auto_close_scopes(&mut self) -> ScopeGuard<'_> {
        let depth = self.open_scopes;
        ScopeGuard {
            writer: self,
            depth,
        }
    }

    /// Number of scopes currently open.
    pub fn open_scopes(&self) -> usize {
        self.open_scopes
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Close any remaining scopes and return the generated code.
    pub fn build(mut self) -> String {
        self.close_scopes_to(0);
        self.buffer
    }

    fn close_scopes_to(&mut self, depth: usize) {
        while self.open_scopes > depth {
            self.open_scopes -= 1;
            self.indent_level = self.indent_level.saturating_sub(1);
            self.push_line("}");
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for ScopedWriter {
    fn default() -> Self {
        Self::csharp()
    }
}

/// Closes, on drop, every scope opened since it was created.
///
/// Dereferences to the underlying [`ScopedWriter`], so guards nest: a guard
/// taken from another guard only closes its own scopes.
#[must_use = "dropping the guard immediately closes its scopes"]
pub struct ScopeGuard<'a> {
    writer: &'a mut ScopedWriter,
    depth: usize,
}

impl Deref for ScopeGuard<'_> {
    type Target = ScopedWriter;

    fn deref(&self) -> &ScopedWriter {
        &*self.writer
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut ScopedWriter {
        &mut *self.writer
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.writer.close_scopes_to(self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut writer = ScopedWriter::csharp();
        writer.push_line("using System;");
        assert_eq!(writer.build(), "using System;\n");
    }

    #[test]
    fn test_blank_line_has_no_indentation() {
        let mut writer = ScopedWriter::csharp();
        {
            let mut scope = writer.auto_close_scopes();
            scope.push_line("class A").open_scope();
            scope.push_line("int x;").push_blank().push_line("int y;");
        }
        assert_eq!(writer.build(), "class A\n{\n    int x;\n\n    int y;\n}\n");
    }

    #[test]
    fn test_guard_closes_all_scopes_in_reverse_order() {
        let mut writer = ScopedWriter::csharp();
        {
            let mut scope = writer.auto_close_scopes();
            for name in ["A", "B", "C"] {
                scope.push_line(&format!("class {}", name)).open_scope();
            }
            assert_eq!(scope.open_scopes(), 3);
            assert_eq!(scope.current_indent(), 3);
        }
        assert_eq!(writer.open_scopes(), 0);
        assert_eq!(writer.current_indent(), 0);
        assert_eq!(
            writer.build(),
            "class A\n{\n    class B\n    {\n        class C\n        {\n        }\n    }\n}\n"
        );
    }

    #[test]
    fn test_nested_guard_only_closes_its_own_scopes() {
        let mut writer = ScopedWriter::csharp();
        {
            let mut outer = writer.auto_close_scopes();
            outer.push_line("namespace N").open_scope();
            {
                let mut inner = outer.auto_close_scopes();
                inner.push_line("class A").open_scope();
            }
            assert_eq!(outer.open_scopes(), 1);
            outer.push_line("class B;");
        }
        assert_eq!(
            writer.build(),
            "namespace N\n{\n    class A\n    {\n    }\n    class B;\n}\n"
        );
    }

    #[test]
    fn test_guard_closes_on_early_return() {
        fn write_until(writer: &mut ScopedWriter, stop_at: usize) {
            let mut scope = writer.auto_close_scopes();
            for i in 0..5 {
                if i == stop_at {
                    return;
                }
                scope.push_line(&format!("class C{}", i)).open_scope();
            }
        }

        let mut writer = ScopedWriter::csharp();
        write_until(&mut writer, 2);
        assert_eq!(writer.open_scopes(), 0);

        let code = writer.build();
        assert_eq!(code.matches('{').count(), 2);
        assert_eq!(code.matches('}').count(), 2);
    }

    #[test]
    fn test_build_closes_unguarded_scopes() {
        let mut writer = ScopedWriter::csharp();
        writer.push_line("class A").open_scope();
        assert_eq!(writer.build(), "class A\n{\n}\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut writer = ScopedWriter::new(Indent::Tab);
        writer.push_line("class A").open_scope();
        writer.push_line("int x;");
        assert_eq!(writer.build(), "class A\n{\n\tint x;\n}\n");
    }
}
