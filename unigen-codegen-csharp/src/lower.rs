//! Lowering of manifest tables into union descriptions.

use unigen_ir::{TagAnnotation, TypeHeader, VariantDescription, VariantUnionDescription};
use unigen_manifest::{Manifest, UnionSpec, VariantSpec};

use crate::naming::CSHARP_NAMING;

/// Lower every `[unions.*]` table, in file order.
pub fn lower_manifest(manifest: &Manifest) -> Vec<VariantUnionDescription> {
    manifest
        .unions
        .iter()
        .map(|(name, spec)| lower_union(name, spec))
        .collect()
}

/// Lower one union table.
///
/// Defaults are filled in but nothing is validated.
pub fn lower_union(name: &str, spec: &UnionSpec) -> VariantUnionDescription {
    let mut self_type = TypeHeader::new(spec.kind, name);
    self_type.type_parameters = spec.type_parameters.clone();
    self_type.constraints = spec.constraints.clone();

    let mut union = VariantUnionDescription::new(self_type, Vec::new()).access(spec.access);
    union.container_chain = spec.containers.clone();
    union.declaring_namespace = spec.namespace.clone();

    let variants = spec
        .variants
        .iter()
        .map(|(variant_name, variant)| lower_variant(&union, variant_name, variant, spec))
        .collect();
    union.variants = variants;

    if let Some(result_type) = &spec.result_type {
        union = union.result_type(result_type);
    }
    if spec.partition {
        union = union.with_partition();
    }

    union
}

fn lower_variant(
    union: &VariantUnionDescription,
    name: &str,
    variant: &VariantSpec,
    spec: &UnionSpec,
) -> VariantDescription {
    let mut self_type = TypeHeader::new(variant.kind.unwrap_or(spec.kind), name);
    self_type.type_parameters = variant.type_parameters.clone();
    self_type.constraints = variant.constraints.clone();

    let parameter = variant
        .parameter
        .clone()
        .unwrap_or_else(|| CSHARP_NAMING.parameter_name(name));

    let mut description = VariantDescription::new(self_type, parameter);
    description.container_chain = variant.containers.clone();

    if let Some(discriminator) = &variant.tag {
        let target_type = variant
            .tag_type
            .clone()
            .unwrap_or_else(|| default_tag_type(union, &description));
        description = description.tag(TagAnnotation::new(target_type, discriminator));
    }

    description
}

/// `typeof` target for a variant's tag, e.g. `Shape.Circle`.
///
/// Attribute arguments cannot mention type parameters, so the path starts at
/// the outermost generic declaration and every generic segment is unbound:
/// `Result<>.Ok`, `Outer<>.Shape.Circle`.
fn default_tag_type(union: &VariantUnionDescription, variant: &VariantDescription) -> String {
    let chain: Vec<&TypeHeader> = union.declaration_chain().collect();
    let start = chain
        .iter()
        .position(|header| header.is_generic())
        .unwrap_or(chain.len() - 1);

    chain[start..]
        .iter()
        .copied()
        .chain(&variant.container_chain)
        .chain(std::iter::once(&variant.self_type))
        .map(unbound_type_name)
        .collect::<Vec<_>>()
        .join(".")
}

/// `Result<T, E>` becomes `Result<,>`; non-generic names pass through.
fn unbound_type_name(header: &TypeHeader) -> String {
    if !header.is_generic() {
        return header.name.clone();
    }
    let commas = header
        .type_parameters
        .as_deref()
        .unwrap_or_default()
        .matches(',')
        .count();
    format!("{}<{}>", header.name, ",".repeat(commas))
}
