//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how variant names become parameter names and how reserved words
/// are made usable as identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a variant type name to its dispatch parameter name
    /// (e.g., "RightTriangle" -> "rightTriangle")
    pub type_to_parameter: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Derive the (unescaped) dispatch parameter name for a variant type.
    pub fn parameter_name(&self, type_name: &str) -> String {
        (self.type_to_parameter)(type_name)
    }
}
