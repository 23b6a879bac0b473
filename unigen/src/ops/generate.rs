//! Generate operation - C# sources from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use unigen_codegen::LanguageCodegen;
use unigen_codegen_csharp::Generator;
use unigen_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output root for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(manifest);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path,
                content: file.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            files: generated.written,
        })
    };

    Ok(GenerateReport {
        union_count: manifest.unions.len(),
        variant_count: manifest.variant_count(),
        result,
    })
}
