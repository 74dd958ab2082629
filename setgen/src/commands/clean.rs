use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use setgen_manifest::{MANIFEST_FILE, SetgenToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to setgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides setgen.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let setgen_toml = SetgenToml::open_or_default(&self.config).unwrap_or_exit();
        let project = Project::new(&setgen_toml).with_output(self.output.as_deref());

        let report = ops::clean(
            &project,
            ops::clean::CleanOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
