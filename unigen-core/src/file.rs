use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body
    fn render(&self) -> String;

    /// Full file content: the rule's header (if any) followed by the body
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{}\n{}", header, self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk, returning the path that was written
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.contents())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Banner emitted above the rendered body, separated from it by a blank line
    pub header: Option<&'static str>,
}
