//! Exhaustive dispatch method signatures.
//!
//! Every union gets two dispatch methods with one callback per variant, in
//! variant order: a value-returning `Match<TResult>` and a side-effecting
//! `Switch`. The union declares both abstract; each variant overrides both
//! with a body that calls only its own callback.

use unigen_ir::{VariantDescription, VariantUnionDescription};

use crate::naming::escape_identifier;

const FUNC: &str = "global::System.Func";
const ACTION: &str = "global::System.Action";

/// `Match` and `Switch` signatures shared by the abstract declarations and
/// every override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSignatures {
    /// `TResult Match<TResult>(...)`
    pub match_method: String,
    /// `void Switch(...)`
    pub switch_method: String,
}

impl DispatchSignatures {
    /// Signatures for every variant of `union`, in declaration order.
    pub fn new(union: &VariantUnionDescription) -> Self {
        Self {
            match_method: match_signature(&union.result_type_parameter_name, &union.variants),
            switch_method: switch_signature(&union.variants),
        }
    }
}

/// `{R} Match<{R}>(Func<Variant, {R}> variant, ...)`
pub fn match_signature(result_type: &str, variants: &[VariantDescription]) -> String {
    let params = join_params(variants, |local| {
        format!("{}<{}, {}>", FUNC, local, result_type)
    });
    format!("{0} Match<{0}>({1})", result_type, params)
}

/// `void Switch(Action<Variant> variant, ...)`
pub fn switch_signature(variants: &[VariantDescription]) -> String {
    let params = join_params(variants, |local| format!("{}<{}>", ACTION, local));
    format!("void Switch({})", params)
}

/// Body of a variant's override: its own callback applied to `this`.
pub fn invocation(variant: &VariantDescription) -> String {
    format!(
        "{}(this)",
        escape_identifier(&variant.dispatch_parameter_name)
    )
}

fn join_params(
    variants: &[VariantDescription],
    callback_type: impl Fn(&str) -> String,
) -> String {
    variants
        .iter()
        .map(|variant| {
            format!(
                "{} {}",
                callback_type(&variant.local_type_name()),
                escape_identifier(&variant.dispatch_parameter_name)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
