use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use menugen_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Overrides},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to menugen.toml (defaults to ./menugen.toml)
    #[arg(short, long, default_value = "menugen.toml")]
    pub config: PathBuf,

    /// Output file (overrides [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix for every menu identifier (overrides [generator].prefix)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix for every menu identifier (overrides [generator].suffix)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Menu priority (overrides [generator].order)
    #[arg(long, allow_negative_numbers = true)]
    pub order: Option<i64>,

    /// Preview the generated file without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let overrides = Overrides {
            output: self.output.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            order: self.order,
        };

        let report = ops::generate(&file, &overrides, self.dry_run).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
