//! Manifest types for unigen.toml files.

mod file;
mod parse;

use indexmap::IndexMap;
use serde::Deserialize;
use unigen_ir::{Accessibility, TypeHeader, TypeKind};

pub use file::UnigenToml;
pub use parse::parse_manifest;

/// Root manifest for unigen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Unions in declaration order, keyed by type name
    #[serde(default)]
    pub unions: IndexMap<String, UnionSpec>,
}

impl Manifest {
    /// Total number of variants across all unions.
    pub fn variant_count(&self) -> usize {
        self.unions.values().map(|union| union.variants.len()).sum()
    }
}

/// `[generator]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Tool name written into `GeneratedCode` markers
    pub name: Option<String>,
    /// Tool version written into `GeneratedCode` markers
    pub version: Option<String>,
    /// Spaces per indentation level
    pub indent: Option<u8>,
    /// Indent with tabs instead of spaces
    #[serde(default)]
    pub tabs: bool,
    /// Output directory, relative to the output root
    pub output: Option<String>,
}

/// `[unions.<Name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionSpec {
    /// Declaration kind of the union
    #[serde(default)]
    pub kind: TypeKind,
    /// Namespace wrapping the generated code
    pub namespace: Option<String>,
    /// Generic parameter list, e.g. `<T>`
    pub type_parameters: Option<String>,
    /// Constraint clauses, e.g. `where T : notnull`
    pub constraints: Option<String>,
    /// Generic parameter name of `Match` (defaults to `TResult`)
    pub result_type: Option<String>,
    /// Access level of generated members
    #[serde(default)]
    pub access: Accessibility,
    /// Generate the `Partition` extension
    #[serde(default)]
    pub partition: bool,
    /// Output file name (defaults to `<Name>.g.cs`)
    pub file: Option<String>,
    /// Enclosing types, outermost first
    #[serde(default)]
    pub containers: Vec<TypeHeader>,
    /// Variants in declaration order, keyed by type name
    #[serde(default)]
    pub variants: IndexMap<String, VariantSpec>,
}

impl UnionSpec {
    /// Output file name for the union called `name`.
    pub fn file_name(&self, name: &str) -> String {
        self.file
            .clone()
            .unwrap_or_else(|| format!("{}.g.cs", name))
    }
}

/// `[unions.<Name>.variants.<Variant>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantSpec {
    /// Declaration kind (defaults to the union's kind)
    pub kind: Option<TypeKind>,
    /// Generic parameter list
    pub type_parameters: Option<String>,
    /// Constraint clauses
    pub constraints: Option<String>,
    /// Dispatch parameter name (defaults to the camelCased type name)
    pub parameter: Option<String>,
    /// JSON discriminator; setting it requests a `JsonDerivedType` annotation
    pub tag: Option<String>,
    /// Type in the annotation's `typeof(...)` (defaults to `<Union>.<Variant>`)
    pub tag_type: Option<String>,
    /// Enclosing types between the union and this variant, outermost first
    #[serde(default)]
    pub containers: Vec<TypeHeader>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const SHAPES: &str = r#"
        [generator]
        name = "shapes-gen"
        version = "2.0.0"
        indent = 2
        output = "Generated"

        [unions.Shape]
        namespace = "Geometry"
        partition = true

        [[unions.Shape.containers]]
        kind = "class"
        name = "Outer"
        type_parameters = "<T>"

        [unions.Shape.variants.Square]
        tag = "square"

        [unions.Shape.variants.Circle]
        parameter = "round"

        [unions.Shape.variants.Arc]
        kind = "record class"

        [unions.Result]
        kind = "class"
        access = "internal"
        result_type = "TOut"
        file = "Results/Result.g.cs"

        [unions.Result.variants.Ok]
        [unions.Result.variants.Err]
    "#;

    #[test]
    fn test_parse_generator_config() {
        let manifest = Manifest::from_str(SHAPES).unwrap();
        let generator = &manifest.generator;
        assert_eq!(generator.name.as_deref(), Some("shapes-gen"));
        assert_eq!(generator.version.as_deref(), Some("2.0.0"));
        assert_eq!(generator.indent, Some(2));
        assert!(!generator.tabs);
        assert_eq!(generator.output.as_deref(), Some("Generated"));
    }

    #[test]
    fn test_unions_and_variants_keep_file_order() {
        let manifest = Manifest::from_str(SHAPES).unwrap();

        let unions: Vec<_> = manifest.unions.keys().map(String::as_str).collect();
        assert_eq!(unions, ["Shape", "Result"]);

        let variants: Vec<_> = manifest.unions["Shape"]
            .variants
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(variants, ["Square", "Circle", "Arc"]);
        assert_eq!(manifest.variant_count(), 5);
    }

    #[test]
    fn test_union_defaults() {
        let manifest = Manifest::from_str(SHAPES).unwrap();
        let shape = &manifest.unions["Shape"];

        assert_eq!(shape.kind, TypeKind::Record);
        assert_eq!(shape.access, Accessibility::Public);
        assert!(shape.result_type.is_none());
        assert!(shape.partition);
        assert_eq!(shape.file_name("Shape"), "Shape.g.cs");
        assert_eq!(shape.containers[0].name, "Outer");
        assert_eq!(shape.containers[0].type_parameters.as_deref(), Some("<T>"));
    }

    #[test]
    fn test_union_overrides() {
        let manifest = Manifest::from_str(SHAPES).unwrap();
        let result = &manifest.unions["Result"];

        assert_eq!(result.kind, TypeKind::Class);
        assert_eq!(result.access, Accessibility::Internal);
        assert_eq!(result.result_type.as_deref(), Some("TOut"));
        assert_eq!(result.file_name("Result"), "Results/Result.g.cs");
        assert!(!result.partition);
    }

    #[test]
    fn test_variant_fields() {
        let manifest = Manifest::from_str(SHAPES).unwrap();
        let variants = &manifest.unions["Shape"].variants;

        assert_eq!(variants["Square"].tag.as_deref(), Some("square"));
        assert_eq!(variants["Circle"].parameter.as_deref(), Some("round"));
        assert_eq!(variants["Arc"].kind, Some(TypeKind::RecordClass));
        assert!(variants["Arc"].tag.is_none());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.unions.is_empty());
        assert_eq!(manifest.variant_count(), 0);
    }
}
