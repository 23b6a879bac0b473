//! `Partition` extension: bucket a sequence of union values per variant.
//!
//! The generated method classifies through the union's own `Switch`, so it
//! never duplicates variant identification:
//!
//! ```text
//! foreach (var item in source)
//! {
//!     item.Switch(circle: circleItems.Add, square: squareItems.Add);
//! }
//! ```

use unigen_codegen::ScopedWriter;
use unigen_ir::{TypeHeader, VariantUnionDescription};

use crate::naming::escape_identifier;

const READ_ONLY_LIST: &str = "global::System.Collections.Generic.IReadOnlyList";
const ENUMERABLE: &str = "global::System.Collections.Generic.IEnumerable";
const IMMUTABLE_LIST: &str = "global::System.Collections.Immutable.ImmutableList";

/// Write `{Union}EnumerableExtensions` with the `Partitions` record and the
/// `Partition` extension method.
///
/// Extension methods need a top-level static class, so this is written as a
/// sibling of the union's outermost container.
pub(crate) fn write_partition_extension(
    writer: &mut ScopedWriter,
    union: &VariantUnionDescription,
) {
    let mut scope = writer.auto_close_scopes();

    let access = union.method_access_level.as_str();
    let union_type = union.qualified_type_name();
    let generics = PartitionGenerics::new(union);

    scope
        .push_line(&format!(
            "{} static class {}EnumerableExtensions",
            access, union.self_type.name
        ))
        .open_scope();

    let fields = union
        .variants
        .iter()
        .map(|variant| {
            format!(
                "{}<{}.{}> {}",
                READ_ONLY_LIST,
                union_type,
                variant.local_type_name(),
                escape_identifier(&variant.dispatch_parameter_name)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    scope.push_line(&format!(
        "public record struct Partitions{}({}){};",
        generics.parameters, fields, generics.constraints
    ));

    scope.push_blank();

    scope
        .push_line(&format!(
            "public static Partitions{0} Partition{0}(this {1}<{2}> source){3}",
            generics.parameters, ENUMERABLE, union_type, generics.constraints
        ))
        .open_scope();

    for variant in &union.variants {
        scope.push_line(&format!(
            "var {}Items = {}.CreateBuilder<{}.{}>();",
            variant.dispatch_parameter_name,
            IMMUTABLE_LIST,
            union_type,
            variant.local_type_name()
        ));
    }

    {
        let mut loop_scope = scope.auto_close_scopes();
        loop_scope
            .push_line("foreach (var item in source)")
            .open_scope();

        let arguments = union
            .variants
            .iter()
            .map(|variant| {
                format!(
                    "{}: {}Items.Add",
                    escape_identifier(&variant.dispatch_parameter_name),
                    variant.dispatch_parameter_name
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        loop_scope.push_line(&format!("item.Switch({});", arguments));
    }

    let items = union
        .variants
        .iter()
        .map(|variant| format!("{}Items.ToImmutable()", variant.dispatch_parameter_name))
        .collect::<Vec<_>>()
        .join(", ");
    scope.push_line(&format!("return new({});", items));
}

/// Type parameters lifted from a generic union's declaration chain onto
/// `Partitions` and `Partition`, e.g. `<T>` and ` where T : notnull`.
///
/// A name declared at several levels of the chain is lifted once, as is a
/// repeated constraint clause.
#[derive(Debug, Default, PartialEq, Eq)]
struct PartitionGenerics {
    parameters: String,
    constraints: String,
}

impl PartitionGenerics {
    fn new(union: &VariantUnionDescription) -> Self {
        let generic: Vec<&TypeHeader> = union
            .declaration_chain()
            .filter(|header| header.is_generic())
            .collect();
        if generic.is_empty() {
            return Self::default();
        }

        let mut parameters: Vec<&str> = Vec::new();
        let names = generic
            .iter()
            .filter_map(|header| header.type_parameters.as_deref())
            .flat_map(|list| {
                list.trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .split(',')
            })
            .map(str::trim)
            .filter(|param| !param.is_empty());
        for name in names {
            if !parameters.contains(&name) {
                parameters.push(name);
            }
        }

        let mut constraints: Vec<&str> = Vec::new();
        let clauses = generic
            .iter()
            .filter_map(|header| header.constraints.as_deref())
            .map(str::trim)
            .filter(|clause| !clause.is_empty());
        for clause in clauses {
            if !constraints.contains(&clause) {
                constraints.push(clause);
            }
        }

        Self {
            parameters: format!("<{}>", parameters.join(", ")),
            constraints: constraints
                .iter()
                .map(|clause| format!(" {}", clause))
                .collect(),
        }
    }
}
