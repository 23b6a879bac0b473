//! Partial type declaration headers.

use unigen_ir::TypeHeader;

/// Render `header` as a single `partial` declaration line.
///
/// Pieces are joined by single spaces and empty pieces are dropped; the
/// generic parameter text attaches to the name without a space:
/// `partial record Result<T> where T : notnull`.
pub fn format_header(header: &TypeHeader) -> String {
    let name = header.type_name();
    [
        "partial",
        header.kind.as_str(),
        name.as_str(),
        header.constraints.as_deref().unwrap_or_default(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|piece| !piece.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use unigen_ir::TypeKind;

    use super::*;

    #[test]
    fn test_simple_header() {
        let shape = format_header(&TypeHeader::record("Shape"));
        let outer = format_header(&TypeHeader::class("Outer"));
        assert_eq!(shape, "partial record Shape");
        assert_eq!(outer, "partial class Outer");
    }

    #[test]
    fn test_record_struct_header() {
        let header = TypeHeader::new(TypeKind::RecordStruct, "Token");
        assert_eq!(format_header(&header), "partial record struct Token");
    }

    #[test]
    fn test_generic_header() {
        let header = TypeHeader::record("Result")
            .type_parameters("<TValue, TError>")
            .constraints("where TValue : notnull where TError : notnull");
        assert_eq!(
            format_header(&header),
            "partial record Result<TValue, TError> where TValue : notnull where TError : notnull"
        );
    }

    #[test]
    fn test_empty_pieces_are_dropped() {
        let header = TypeHeader::class("Outer")
            .type_parameters("")
            .constraints("  ");
        assert_eq!(format_header(&header), "partial class Outer");
    }
}
