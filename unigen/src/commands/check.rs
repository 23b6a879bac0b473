use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use unigen_codegen_csharp::lower_manifest;
use unigen_manifest::UnigenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to unigen.toml (defaults to ./unigen.toml)
    #[arg(short, long, default_value = "unigen.toml")]
    pub config: PathBuf,

    /// Print the lowered union descriptions as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let unigen_toml = UnigenToml::open(&self.config).unwrap_or_exit();
        let manifest = unigen_toml.manifest();

        if self.json {
            let descriptions = lower_manifest(manifest);
            let json = serde_json::to_string_pretty(&descriptions)
                .wrap_err("Failed to serialize union descriptions")?;
            println!("{}", json);
            return Ok(());
        }

        ops::check(manifest, unigen_toml.path()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
