use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use setgen_manifest::{MANIFEST_FILE, SetgenToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Settings-definition file to read
    pub asset: PathBuf,

    /// Path to setgen.toml, for the [format] section
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let setgen_toml = SetgenToml::open_or_default(&self.config).unwrap_or_exit();
        let report = ops::list(&self.asset, &setgen_toml.manifest().format).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
