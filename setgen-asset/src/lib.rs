//! Settings-definition files: locating them and recovering their records.
//!
//! A settings-definition file stores its records field-major: every field
//! of every record appears as its own `<key>: <value>` line, and records
//! are recovered by correlating the i-th occurrence of each key.
//!
//! - [`resolve`] locates and reads a file relative to a declaring source file
//! - [`FieldStreams`] collects the per-key value lists
//! - [`reconstruct`] correlates the streams into a [`SettingsBatch`]
//!
//! [`SettingsBatch`]: setgen_core::SettingsBatch

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod format;
mod reconstruct;
mod resolve;
mod streams;

pub use error::{Error, Result};
pub use format::{AssetFormat, FieldKey, FieldKeys};
pub use reconstruct::{reconstruct, reconstruct_source, reconstruct_with_filename};
pub use resolve::{SettingsSource, normalize_path, resolve};
pub use streams::FieldStreams;
