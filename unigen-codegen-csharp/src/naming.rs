//! C#-specific naming conventions.

use unigen_codegen::NamingConvention;
use unigen_core::to_camel_case;

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    // Dispatch parameters use camelCase
    type_to_parameter: to_camel_case,
    // Reserved keywords only; contextual keywords (var, record, ...) are
    // valid parameter names.
    reserved_words: &[
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
        // Undocumented keywords
        "__arglist",
        "__makeref",
        "__reftype",
        "__refvalue",
    ],
    escape_reserved: escape_csharp_reserved,
};

/// Make `name` usable as a parameter name or invocation target.
///
/// Reserved keywords get the verbatim `@` prefix; everything else, including
/// already-escaped names, is returned unchanged.
pub fn escape_identifier(name: &str) -> String {
    CSHARP_NAMING.safe_name(name)
}
