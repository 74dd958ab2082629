//! Manifest types and parsing for setgen.toml files.

mod file;
mod mode;
mod parse;
mod project;
mod validate;

pub use file::SetgenToml;
pub use mode::Mode;
pub use parse::parse_manifest;
pub use project::{ProjectConfig, RuntimeConfig};
use serde::Deserialize;
use setgen_asset::AssetFormat;

/// Root manifest for setgen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Where to look for declarations and where to put generated files
    pub project: ProjectConfig,

    /// Runtime lookup used by indirect accessors
    pub runtime: RuntimeConfig,

    /// Layout of settings-definition files
    pub format: AssetFormat,
}
