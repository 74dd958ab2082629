//! `setgen.toml` project configuration.
//!
//! Every section is optional; a missing file behaves like an empty one.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, Mode, ProjectConfig, RuntimeConfig, SetgenToml, parse_manifest};
pub use setgen_asset::{AssetFormat, FieldKey, FieldKeys};

/// File name looked up when no `--config` is given.
pub const MANIFEST_FILE: &str = "setgen.toml";
