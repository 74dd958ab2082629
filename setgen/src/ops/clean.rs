//! Clean operation - remove generated files no longer produced.

use eyre::{Context, Result};

use super::{Messages, Project};
use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Deletes `*.g.cs` files in the output directory that the current pass
/// does not generate.
pub fn clean(project: &Project, opts: CleanOptions) -> Result<CleanReport> {
    let compilation = project.compile()?;
    let messages = Messages::collect(&compilation.diagnostics);

    let orphans = compilation
        .orphans(&project.output_dir)
        .wrap_err("Failed to list generated files")?;

    if !opts.dry_run {
        for path in &orphans {
            std::fs::remove_file(path)
                .wrap_err_with(|| format!("Failed to delete {}", path.display()))?;
            tracing::debug!(path = %path.display(), "deleted orphaned file");
        }
    }

    Ok(CleanReport {
        dry_run: opts.dry_run,
        warnings: messages.warnings,
        deleted: orphans
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
    })
}
