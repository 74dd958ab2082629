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
pub struct CheckCommand {
    /// Path to setgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Accessor mode (overrides setgen.toml setting)
    #[arg(short, long)]
    pub mode: Option<Mode>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let setgen_toml = SetgenToml::open_or_default(&self.config).unwrap_or_exit();
        let project = Project::new(&setgen_toml).with_mode(self.mode);

        let report = ops::check(&project)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
