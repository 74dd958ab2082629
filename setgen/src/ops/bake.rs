//! Bake operation - generate accessor files for every settings container.

use eyre::{Context, Result};
use setgen_core::WriteResult;

use super::{Messages, Project};
use crate::reports::{
    BakeReport, FileChange, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the bake operation.
pub struct BakeOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Failed declarations still get a file carrying their error, so the
/// operation itself only fails on I/O problems.
pub fn bake(project: &Project, opts: BakeOptions) -> Result<BakeReport> {
    let compilation = project.compile()?;
    let messages = Messages::collect(&compilation.diagnostics);
    let containers = compilation.files.len();

    let result = if opts.dry_run {
        let files = compilation
            .files
            .iter()
            .map(|file| PreviewFile {
                path: file.name.clone(),
                content: file.content.clone(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = compilation
            .write(&project.output_dir)
            .wrap_err("Failed to write generated files")?;
        let stale = compilation
            .orphans(&project.output_dir)
            .wrap_err("Failed to list generated files")?;

        let files = compilation
            .files
            .iter()
            .zip(&written)
            .map(|(file, written)| FileChange {
                name: file.name.clone(),
                accessors: file.accessors,
                failed: file.failed,
                changed: written.result == WriteResult::Written,
            })
            .collect();

        GenerationResult::Written(WrittenResult {
            output_dir: project.output_dir.clone(),
            files,
            stale: stale
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect(),
        })
    };

    Ok(BakeReport {
        errors: messages.errors,
        warnings: messages.warnings,
        containers,
        result,
    })
}
