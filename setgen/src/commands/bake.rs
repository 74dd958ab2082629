use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use setgen_manifest::{MANIFEST_FILE, Mode, SetgenToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to setgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Accessor mode (overrides setgen.toml setting)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Output directory (overrides setgen.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let setgen_toml = SetgenToml::open_or_default(&self.config).unwrap_or_exit();
        let project = Project::new(&setgen_toml)
            .with_mode(self.mode)
            .with_output(self.output.as_deref());

        let report = ops::bake(
            &project,
            ops::bake::BakeOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
