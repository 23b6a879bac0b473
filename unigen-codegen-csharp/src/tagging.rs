//! Serialization discriminator annotations.

use unigen_codegen::ScopedWriter;
use unigen_ir::VariantDescription;

use crate::literal::string_literal;

const JSON_DERIVED_TYPE: &str = "global::System.Text.Json.Serialization.JsonDerivedType";

/// Write one `JsonDerivedType` attribute per tagged variant, in variant
/// order. Untagged variants contribute nothing.
pub fn write_tag_annotations(writer: &mut ScopedWriter, variants: &[VariantDescription]) {
    for tag in variants.iter().filter_map(|variant| variant.tag.as_ref()) {
        writer.push_line(&format!(
            "[{}(typeof({}), {})]",
            JSON_DERIVED_TYPE,
            tag.target_type,
            string_literal(&tag.discriminator)
        ));
    }
}

#[cfg(test)]
mod tests {
    use unigen_ir::{TagAnnotation, TypeHeader};

    use super::*;

    #[test]
    fn test_only_tagged_variants_are_written() {
        let variants = vec![
            VariantDescription::new(TypeHeader::record("Circle"), "circle")
                .tag(TagAnnotation::new("Shape.Circle", "circle")),
            VariantDescription::new(TypeHeader::record("Square"), "square"),
            VariantDescription::new(TypeHeader::record("Point"), "point")
                .tag(TagAnnotation::new("Shape.Point", "point")),
        ];

        let mut writer = ScopedWriter::csharp();
        write_tag_annotations(&mut writer, &variants);

        assert_eq!(
            writer.build(),
            "[global::System.Text.Json.Serialization.JsonDerivedType(typeof(Shape.Circle), \"circle\")]\n\
             [global::System.Text.Json.Serialization.JsonDerivedType(typeof(Shape.Point), \"point\")]\n"
        );
    }

    #[test]
    fn test_discriminator_is_escaped() {
        let quote = VariantDescription::new(TypeHeader::record("Quote"), "quote")
            .tag(TagAnnotation::new("Shape.Quote", "say \"hi\""));

        let mut writer = ScopedWriter::csharp();
        write_tag_annotations(&mut writer, &[quote]);

        let code = writer.build();
        assert!(code.contains(r#"typeof(Shape.Quote), "say \"hi\"")]"#));
    }

    #[test]
    fn test_untagged_union_writes_nothing() {
        let circle = VariantDescription::new(TypeHeader::record("Circle"), "circle");
        let mut writer = ScopedWriter::csharp();
        write_tag_annotations(&mut writer, &[circle]);
        assert_eq!(writer.build(), "");
    }
}
