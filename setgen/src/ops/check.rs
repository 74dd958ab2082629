//! Check operation - compile without writing.

use eyre::Result;

use super::{Messages, Project};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the full pipeline and reports its diagnostics.
pub fn check(project: &Project) -> Result<CheckReport> {
    let compilation = project.compile()?;
    let messages = Messages::collect(&compilation.diagnostics);

    Ok(CheckReport {
        config_path: project.config_path.clone(),
        containers: compilation.files.len(),
        failed: compilation.failed_files().count(),
        errors: messages.errors,
        warnings: messages.warnings,
        infos: messages.infos,
    })
}
