use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use unigen_manifest::UnigenToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to unigen.toml (defaults to ./unigen.toml)
    #[arg(short, long, default_value = "unigen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let unigen_toml = UnigenToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            unigen_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
