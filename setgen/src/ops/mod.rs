//! Core operations.
//!
//! This module contains the business logic for setgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod clean;
pub mod list;
mod project;

pub use bake::bake;
pub use check::check;
pub use clean::clean;
pub use list::list;
pub use project::Project;
use setgen_codegen::pipeline::{Diagnostic, Severity};

/// Diagnostic messages split by severity, each with its location appended.
#[derive(Debug, Default)]
pub(crate) struct Messages {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Messages {
    pub fn collect(diagnostics: &[Diagnostic]) -> Self {
        let mut messages = Self::default();
        for diag in diagnostics {
            let msg = if let Some(loc) = &diag.location {
                format!("{}\n  --> {}", diag.message, loc)
            } else {
                diag.message.clone()
            };

            match diag.severity {
                Severity::Error => messages.errors.push(msg),
                Severity::Warning => messages.warnings.push(msg),
                Severity::Info => messages.infos.push(msg),
            }
        }
        messages
    }
}
