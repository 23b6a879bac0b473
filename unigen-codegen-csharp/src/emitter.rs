//! Top-level union emission.

use unigen_codegen::{Indent, ScopedWriter};
use unigen_ir::VariantUnionDescription;

use crate::{
    literal::string_literal, partition::write_partition_extension, union::write_union_type,
};

/// Tool identity written into every `GeneratedCode` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
}

impl GeneratorInfo {
    /// Tool identity from a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The attribute line preceding each generated member.
    pub fn marker(&self) -> String {
        format!(
            "[global::System.CodeDom.Compiler.GeneratedCode({}, {})]",
            string_literal(&self.name),
            string_literal(&self.version)
        )
    }
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self::new("unigen", env!("CARGO_PKG_VERSION"))
    }
}

/// Formatting options for emitted code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Indentation per scope level.
    pub indent: Indent,
    /// Identity written into `GeneratedCode` markers.
    pub tool: GeneratorInfo,
}

impl EmitOptions {
    /// Set the indentation.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the tool identity.
    pub fn tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool = GeneratorInfo::new(name, version);
        self
    }
}

/// Emits C# source for variant unions.
///
/// Holds only options; every call to [`emit`](Self::emit) works on its own
/// writer, so one emitter can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    /// Emitter with the given options.
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Emit the union declaration, its variants' overrides, and (when
    /// requested) the partition extension.
    ///
    /// The description is assumed valid: non-empty variants with distinct
    /// parameter names. Nothing is checked.
    #[tracing::instrument(
        skip_all,
        fields(union = %description.self_type.name, variants = description.variants.len())
    )]
    pub fn emit(&self, description: &VariantUnionDescription) -> String {
        let marker = self.options.tool.marker();
        let mut writer = ScopedWriter::new(self.options.indent);

        {
            let mut scope = writer.auto_close_scopes();

            if let Some(namespace) = description
                .declaring_namespace
                .as_deref()
                .filter(|ns| !ns.is_empty())
            {
                scope
                    .push_line(&format!("namespace {}", namespace))
                    .open_scope();
            }

            write_union_type(&mut scope, description, &marker);

            if description.emit_partition_utility {
                scope.push_blank();
                write_partition_extension(&mut scope, description);
            }
        }

        let code = writer.build();
        tracing::debug!(bytes = code.len(), "emitted union");
        code
    }
}

/// Emit `description` with default options.
pub fn emit(description: &VariantUnionDescription) -> String {
    Emitter::default().emit(description)
}
