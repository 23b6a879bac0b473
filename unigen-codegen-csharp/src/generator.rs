//! C# code generator producing one source file per union.

use std::path::{Path, PathBuf};

use eyre::Result;
use unigen_codegen::{
    Indent,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use unigen_core::GeneratedFile;
use unigen_manifest::{GeneratorConfig, Manifest};

use crate::{
    emitter::{EmitOptions, Emitter},
    files::UnionFile,
    lower::lower_union,
};

/// Output directory used when `[generator] output` is not set.
pub const DEFAULT_OUTPUT_DIR: &str = "Generated";

/// C# code generator for every union in a manifest.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    emitter: Emitter,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "g.cs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let dir = Path::new(self.output_dir());
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path(dir).display().to_string(),
                content: file.contents(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let base = output_dir.join(self.output_dir());
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.write(&base)?;
            tracing::info!(path = %path.display(), "wrote union file");
            result.written.push(path);
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    /// Create a generator whose options come from the `[generator]` table.
    pub fn new(manifest: &'a Manifest) -> Self {
        Self::with_options(manifest, options_from_config(&manifest.generator))
    }

    /// Create a generator with explicit emit options.
    pub fn with_options(manifest: &'a Manifest, options: EmitOptions) -> Self {
        Self {
            manifest,
            emitter: Emitter::new(options),
        }
    }

    /// Directory, relative to the output root, that receives the files.
    pub fn output_dir(&self) -> &str {
        self.manifest
            .generator
            .output
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    fn files(&self) -> Vec<UnionFile> {
        self.manifest
            .unions
            .iter()
            .map(|(name, spec)| {
                let description = lower_union(name, spec);
                UnionFile::new(
                    PathBuf::from(spec.file_name(name)),
                    self.emitter.emit(&description),
                )
            })
            .collect()
    }
}

/// Build emit options from the `[generator]` table, falling back to defaults.
pub fn options_from_config(config: &GeneratorConfig) -> EmitOptions {
    let width = if config.tabs {
        None
    } else {
        Some(config.indent.unwrap_or(4))
    };

    let mut options = EmitOptions::default().indent(Indent::from_width(width));
    if let Some(name) = &config.name {
        options.tool.name = name.clone();
    }
    if let Some(version) = &config.version {
        options.tool.version = version.clone();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_empty_config() {
        let options = options_from_config(&GeneratorConfig::default());
        assert_eq!(options, EmitOptions::default());
    }

    #[test]
    fn test_options_from_config() {
        let config = GeneratorConfig {
            name: Some("shapes-gen".to_string()),
            version: Some("2.0.0".to_string()),
            indent: Some(2),
            ..Default::default()
        };
        let options = options_from_config(&config);

        assert_eq!(options.indent, Indent::Spaces(2));
        assert_eq!(options.tool.name, "shapes-gen");
        assert_eq!(options.tool.version, "2.0.0");
    }

    #[test]
    fn test_tabs_override_indent_width() {
        let config = GeneratorConfig {
            indent: Some(2),
            tabs: true,
            ..Default::default()
        };
        assert_eq!(options_from_config(&config).indent, Indent::Tab);
    }

    #[test]
    fn test_output_dir_defaults() {
        let manifest = Manifest::default();
        assert_eq!(Generator::new(&manifest).output_dir(), DEFAULT_OUTPUT_DIR);
    }
}
