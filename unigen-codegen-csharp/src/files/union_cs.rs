//! One `.g.cs` file per union.

use std::path::{Path, PathBuf};

use unigen_core::{FileRules, GeneratedFile};

/// Banner at the top of every generated file.
pub const HEADER: &str = "// <auto-generated/>\n#nullable enable\n";

/// A generated union source file.
pub struct UnionFile {
    path: PathBuf,
    body: String,
}

impl UnionFile {
    /// Create a file at `path` (relative to the output directory) holding
    /// the emitted `body`.
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }
}

impl GeneratedFile for UnionFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            header: Some(HEADER),
        }
    }

    fn render(&self) -> String {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_start_with_header_and_blank_line() {
        let file = UnionFile::new("Shape.g.cs", "partial record Shape\n{\n}\n");
        assert_eq!(
            file.contents(),
            "// <auto-generated/>\n#nullable enable\n\npartial record Shape\n{\n}\n"
        );
    }

    #[test]
    fn test_path_is_relative_to_base() {
        let file = UnionFile::new("Results/Result.g.cs", "");
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out").join("Results/Result.g.cs")
        );
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("Shape.g.cs"), "stale").unwrap();

        let path = UnionFile::new("Shape.g.cs", "fresh\n")
            .write(temp.path())
            .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.ends_with("\nfresh\n"));
        assert!(!written.contains("stale"));
    }
}
