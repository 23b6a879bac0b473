//! Core type definitions.

use serde::{Deserialize, Serialize};

/// The declaration keyword of a partial type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeKind {
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "struct")]
    Struct,
    #[serde(rename = "interface")]
    Interface,
    #[default]
    #[serde(rename = "record")]
    Record,
    #[serde(rename = "record class")]
    RecordClass,
    #[serde(rename = "record struct")]
    RecordStruct,
}

impl TypeKind {
    /// Get the keyword(s) introducing a declaration of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
            TypeKind::RecordClass => "record class",
            TypeKind::RecordStruct => "record struct",
        }
    }
}

/// Access modifier applied to every generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accessibility {
    #[default]
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "protected")]
    Protected,
    #[serde(rename = "protected internal")]
    ProtectedInternal,
    #[serde(rename = "private protected")]
    PrivateProtected,
    #[serde(rename = "private")]
    Private,
}

impl Accessibility {
    /// Get the modifier keyword(s).
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Protected => "protected",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::PrivateProtected => "private protected",
            Accessibility::Private => "private",
        }
    }
}

/// Header of a type declaration: kind, name, and raw generic text.
///
/// `type_parameters` and `constraints` are carried verbatim (e.g. `<T>` and
/// `where T : notnull`); they are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHeader {
    /// Declaration keyword.
    pub kind: TypeKind,
    /// Declared identifier.
    pub name: String,
    /// Generic parameter list including angle brackets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<String>,
    /// Constraint clauses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl TypeHeader {
    /// Create a non-generic header.
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_parameters: None,
            constraints: None,
        }
    }

    /// Shorthand for a `class` header.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Shorthand for a `record` header.
    pub fn record(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Record, name)
    }

    /// Set the generic parameter list.
    pub fn type_parameters(mut self, params: impl Into<String>) -> Self {
        self.type_parameters = Some(params.into());
        self
    }

    /// Set the constraint clauses.
    pub fn constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// The name as a type token, e.g. `Result<T>`.
    pub fn type_name(&self) -> String {
        match &self.type_parameters {
            Some(params) => format!("{}{}", self.name, params),
            None => self.name.clone(),
        }
    }

    /// Returns true if this header declares generic parameters.
    pub fn is_generic(&self) -> bool {
        self.type_parameters
            .as_deref()
            .is_some_and(|params| !params.trim().is_empty())
    }
}
