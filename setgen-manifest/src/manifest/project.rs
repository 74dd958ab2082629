use std::path::PathBuf;

use serde::Deserialize;

use super::Mode;

/// The `[project]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directories scanned for `*.cs` files, relative to the manifest.
    pub sources: Vec<PathBuf>,

    /// Directory receiving the generated `*.g.cs` files.
    pub output: PathBuf,

    /// Simple name of the attribute marking settings containers.
    pub attribute: String,

    pub mode: Mode,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            sources: vec![PathBuf::from(".")],
            output: PathBuf::from("Generated"),
            attribute: "GlobalSettings".to_string(),
            mode: Mode::Direct,
        }
    }
}

/// The `[runtime]` section, describing the lookup used in indirect mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Generic lookup method called as `{lookup}<T>("raw name")`.
    ///
    /// May be qualified, e.g. `SettingsRuntime.GetSetting`.
    pub lookup: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            lookup: "GetSetting".to_string(),
        }
    }
}
