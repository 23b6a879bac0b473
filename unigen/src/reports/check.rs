//! Check command report data structures.

use std::path::PathBuf;

use super::{
    generate::plural,
    output::{Output, Report},
};

/// Report data from a manifest check.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// One summary per union, in declaration order.
    pub unions: Vec<UnionSummary>,
}

/// Declared shape of one union.
#[derive(Debug)]
pub struct UnionSummary {
    pub name: String,
    pub kind: &'static str,
    /// Output file name.
    pub file: String,
    /// Whether the partition extension is requested.
    pub partition: bool,
    /// Variant names in declaration order.
    pub variants: Vec<String>,
}

impl CheckReport {
    /// Total number of variants.
    pub fn variant_count(&self) -> usize {
        self.unions.iter().map(|union| union.variants.len()).sum()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let count = self.unions.len();
        let variants = self.variant_count();
        out.section(&format!(
            "{} {}, {} {}",
            count,
            plural(count, "union", "unions"),
            variants,
            plural(variants, "variant", "variants"),
        ));

        for union in &self.unions {
            let partition = if union.partition { ", partition" } else { "" };
            let heading = format!(
                "{} ({}{}) -> {}",
                union.name, union.kind, partition, union.file
            );
            out.key_value_indented(&heading, &union.variants.join(" | "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("unigen.toml"),
            unions: vec![
                UnionSummary {
                    name: "Shape".to_string(),
                    kind: "record",
                    file: "Shape.g.cs".to_string(),
                    partition: true,
                    variants: vec!["Circle".to_string(), "Square".to_string()],
                },
                UnionSummary {
                    name: "Option".to_string(),
                    kind: "class",
                    file: "Option.g.cs".to_string(),
                    partition: false,
                    variants: vec!["Some".to_string()],
                },
            ],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "✓ unigen.toml is valid",
                "",
                "2 unions, 3 variants:",
                "  Shape (record, partition) -> Shape.g.cs: Circle | Square",
                "  Option (class) -> Option.g.cs: Some",
            ]
        );
    }
}
