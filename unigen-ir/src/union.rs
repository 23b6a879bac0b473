//! Union and variant descriptions.

use serde::{Deserialize, Serialize};

use crate::{Accessibility, TypeHeader};

/// A closed variant type, fully described.
///
/// Invariants (guaranteed by whoever builds the description, never checked
/// here or by the emitters):
/// - `variants` is non-empty
/// - every `dispatch_parameter_name` is distinct
/// - `result_type_parameter_name` collides with no type parameter in scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantUnionDescription {
    /// Enclosing types, outermost first.
    #[serde(default)]
    pub container_chain: Vec<TypeHeader>,
    /// Namespace wrapping the whole output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_namespace: Option<String>,
    /// The union's own declaration.
    pub self_type: TypeHeader,
    /// Variants in declaration order.
    pub variants: Vec<VariantDescription>,
    /// Generic parameter of the value-returning dispatch method.
    pub result_type_parameter_name: String,
    /// Modifier for every generated member.
    pub method_access_level: Accessibility,
    /// Whether to emit the partition utility.
    #[serde(default)]
    pub emit_partition_utility: bool,
}

impl VariantUnionDescription {
    /// Create a top-level union with `TResult` as result parameter and
    /// public members.
    pub fn new(self_type: TypeHeader, variants: Vec<VariantDescription>) -> Self {
        Self {
            container_chain: Vec::new(),
            declaring_namespace: None,
            self_type,
            variants,
            result_type_parameter_name: "TResult".to_string(),
            method_access_level: Accessibility::Public,
            emit_partition_utility: false,
        }
    }

    /// Set the declaring namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.declaring_namespace = Some(namespace.into());
        self
    }

    /// Append an enclosing type (call outermost first).
    pub fn container(mut self, header: TypeHeader) -> Self {
        self.container_chain.push(header);
        self
    }

    /// Set the result type parameter name.
    pub fn result_type(mut self, name: impl Into<String>) -> Self {
        self.result_type_parameter_name = name.into();
        self
    }

    /// Set the member access level.
    pub fn access(mut self, access: Accessibility) -> Self {
        self.method_access_level = access;
        self
    }

    /// Request the partition utility.
    pub fn with_partition(mut self) -> Self {
        self.emit_partition_utility = true;
        self
    }

    /// Union and container headers, outermost first, ending with the union.
    pub fn declaration_chain(&self) -> impl Iterator<Item = &TypeHeader> {
        self.container_chain
            .iter()
            .chain(std::iter::once(&self.self_type))
    }

    /// Name of the union qualified by its containers, e.g. `Outer.Shape`.
    pub fn qualified_type_name(&self) -> String {
        self.declaration_chain()
            .map(TypeHeader::type_name)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Serialization discriminator for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAnnotation {
    /// Type token placed in `typeof(...)`.
    pub target_type: String,
    /// Discriminator value, emitted as an escaped string literal.
    pub discriminator: String,
}

impl TagAnnotation {
    /// Tag `target_type` with `discriminator`.
    pub fn new(target_type: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            discriminator: discriminator.into(),
        }
    }
}

/// One variant of a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescription {
    /// Enclosing types between the union and this variant, outermost first.
    #[serde(default)]
    pub container_chain: Vec<TypeHeader>,
    /// The variant's own declaration.
    pub self_type: TypeHeader,
    /// Callback parameter name in dispatch methods; also the partition
    /// field name.
    pub dispatch_parameter_name: String,
    /// Tag annotation, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagAnnotation>,
}

impl VariantDescription {
    /// Create an untagged variant directly nested in the union.
    pub fn new(self_type: TypeHeader, dispatch_parameter_name: impl Into<String>) -> Self {
        Self {
            container_chain: Vec::new(),
            self_type,
            dispatch_parameter_name: dispatch_parameter_name.into(),
            tag: None,
        }
    }

    /// Append an enclosing type (call outermost first).
    pub fn container(mut self, header: TypeHeader) -> Self {
        self.container_chain.push(header);
        self
    }

    /// Attach a tag annotation.
    pub fn tag(mut self, tag: TagAnnotation) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Type token of this variant relative to the union body, e.g.
    /// `Polygons.Square`.
    pub fn local_type_name(&self) -> String {
        self.container_chain
            .iter()
            .chain(std::iter::once(&self.self_type))
            .map(TypeHeader::type_name)
            .collect::<Vec<_>>()
            .join(".")
    }
}
