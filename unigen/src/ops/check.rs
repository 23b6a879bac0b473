//! Check operation - manifest summary.

use std::path::Path;

use unigen_manifest::Manifest;

use crate::reports::{CheckReport, UnionSummary};

/// Execute the check operation.
///
/// Parsing already succeeded at this point; descriptions are not validated
/// further, so the report only summarizes what was declared.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let unions = manifest
        .unions
        .iter()
        .map(|(name, spec)| UnionSummary {
            name: name.clone(),
            kind: spec.kind.as_str(),
            file: spec.file_name(name),
            partition: spec.partition,
            variants: spec.variants.keys().cloned().collect(),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        unions,
    }
}
