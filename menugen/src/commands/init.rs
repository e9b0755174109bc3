use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use menugen_codegen::generation::MenugenToml;
use menugen_core::{DirPolicy, OutputPath};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create menugen.toml in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Generated file path written into [generator].output
    #[arg(short, long)]
    pub output: Option<String>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut starter = MenugenToml::new();
        if let Some(output) = &self.output {
            starter = starter.with_output(output);
        }

        let path = starter.path(&self.path);
        if path.exists() {
            bail!("{} already exists", path.display());
        }

        OutputPath::validate(&path, DirPolicy::Create)
            .and_then(|target| target.write(&starter.render()))
            .wrap_err("Failed to write menugen.toml")?;
        tracing::info!(path = %path.display(), "wrote starter manifest");

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  declare your asset types under [types]");
        println!("  menugen check");
        println!("  menugen generate");

        Ok(())
    }
}
