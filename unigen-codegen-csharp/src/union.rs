//! Union body: abstract dispatch declarations plus one override per variant.

use unigen_codegen::ScopedWriter;
use unigen_ir::{TypeHeader, VariantDescription, VariantUnionDescription};

use crate::{
    declaration::format_header,
    dispatch::{self, DispatchSignatures},
    tagging::write_tag_annotations,
};

/// Write the union's containers, tag annotations, and declaration.
///
/// All scopes opened here (containers, union, variants) are closed before
/// returning.
pub(crate) fn write_union_type(
    writer: &mut ScopedWriter,
    union: &VariantUnionDescription,
    marker: &str,
) {
    let mut scope = writer.auto_close_scopes();

    write_containers(&mut scope, &union.container_chain);

    write_tag_annotations(&mut scope, &union.variants);
    scope
        .push_line(&format_header(&union.self_type))
        .open_scope();

    let access = union.method_access_level.as_str();
    let signatures = DispatchSignatures::new(union);

    write_generated_member(
        &mut scope,
        marker,
        &format!("{} abstract {};", access, signatures.match_method),
    );
    scope.push_blank();
    write_generated_member(
        &mut scope,
        marker,
        &format!("{} abstract {};", access, signatures.switch_method),
    );

    for variant in &union.variants {
        write_variant(&mut scope, variant, access, &signatures, marker);
    }
}

fn write_variant(
    writer: &mut ScopedWriter,
    variant: &VariantDescription,
    access: &str,
    signatures: &DispatchSignatures,
    marker: &str,
) {
    tracing::debug!(
        variant = %variant.self_type.name,
        parameter = %variant.dispatch_parameter_name,
        "writing variant overrides"
    );

    let mut scope = writer.auto_close_scopes();
    scope.push_blank();

    write_containers(&mut scope, &variant.container_chain);

    scope
        .push_line(&format_header(&variant.self_type))
        .open_scope();

    let body = dispatch::invocation(variant);
    write_generated_member(
        &mut scope,
        marker,
        &format!(
            "{} override {} => {};",
            access, signatures.match_method, body
        ),
    );
    scope.push_blank();
    write_generated_member(
        &mut scope,
        marker,
        &format!(
            "{} override {} => {};",
            access, signatures.switch_method, body
        ),
    );
}

/// Open one scope per header, outermost first. The caller's guard closes them.
pub(crate) fn write_containers(writer: &mut ScopedWriter, containers: &[TypeHeader]) {
    for container in containers {
        writer.push_line(&format_header(container)).open_scope();
    }
}

fn write_generated_member(writer: &mut ScopedWriter, marker: &str, member: &str) {
    writer.push_line(marker).push_line(member);
}

#[cfg(test)]
mod tests {
    use unigen_ir::TypeHeader;

    use super::*;

    const MARKER: &str = "[Generated]";

    fn shape() -> VariantUnionDescription {
        VariantUnionDescription::new(
            TypeHeader::record("Shape"),
            vec![
                VariantDescription::new(TypeHeader::record("Circle"), "circle"),
                VariantDescription::new(TypeHeader::record("Square"), "square"),
            ],
        )
    }

    fn render(union: &VariantUnionDescription) -> String {
        let mut writer = ScopedWriter::csharp();
        write_union_type(&mut writer, union, MARKER);
        assert_eq!(writer.open_scopes(), 0);
        writer.build()
    }

    #[test]
    fn test_containers_open_outermost_first() {
        let union = shape()
            .container(TypeHeader::class("Outer"))
            .container(TypeHeader::class("Inner"));
        let code = render(&union);

        let outer = code.find("partial class Outer").unwrap();
        let inner = code.find("    partial class Inner").unwrap();
        let shape = code.find("        partial record Shape").unwrap();
        assert!(outer < inner && inner < shape);
        assert!(code.ends_with("        }\n    }\n}\n"));
    }

    #[test]
    fn test_each_override_calls_only_its_own_callback() {
        let code = render(&shape());
        let circle = code.find("partial record Circle").unwrap();
        let square = code.find("partial record Square").unwrap();

        let circle_body = &code[circle..square];
        let square_body = &code[square..];

        assert_eq!(circle_body.matches("=> circle(this);").count(), 2);
        assert!(!circle_body.contains("square(this)"));
        assert_eq!(square_body.matches("=> square(this);").count(), 2);
        assert!(!square_body.contains("circle(this)"));
    }

    #[test]
    fn test_no_default_arm() {
        let code = render(&shape());
        assert!(!code.contains("default"));
        assert!(!code.contains("throw"));
        assert_eq!(code.matches("abstract").count(), 2);
        assert_eq!(code.matches("override").count(), 4);
    }

    #[test]
    fn test_variant_containers_are_closed_per_variant() {
        let mut union = shape();
        union.variants[1] = union.variants[1]
            .clone()
            .container(TypeHeader::class("Polygons"));
        let code = render(&union);

        let nested = "    partial class Polygons\n    {\n        partial record Square\n";
        assert!(code.contains(nested));
        assert_eq!(code.matches('{').count(), code.matches('}').count());
    }

    #[test]
    fn test_every_member_is_marked() {
        let code = render(&shape());
        assert_eq!(code.matches(MARKER).count(), 6);
    }

    #[test]
    fn test_access_level_applies_to_all_members() {
        let union = shape().access(unigen_ir::Accessibility::Internal);
        let code = render(&union);
        assert_eq!(code.matches("internal abstract").count(), 2);
        assert_eq!(code.matches("internal override").count(), 4);
        assert!(!code.contains("public"));
    }
}
