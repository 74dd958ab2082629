//! Walking the project tree for C# sources.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

use crate::{Declaration, read_declarations};

/// Directories never scanned: build output and tool caches.
const SKIPPED_DIRS: &[&str] = &["Library", "Temp", "Logs", "obj", "bin"];

/// Collect every `*.cs` file under `roots`, excluding generated `*.g.cs`
/// files, sorted so repeated runs see the same order.
///
/// A root may also name a single `.cs` file. Missing roots are skipped with
/// a warning.
pub fn collect_sources(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            if is_source_file(root) {
                files.push(root.clone());
            }
        } else if root.is_dir() {
            walk(root, &mut files)?;
        } else {
            tracing::warn!(root = %root.display(), "source root does not exist");
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read the declarations of every source file under `roots`.
///
/// Files that cannot be read as UTF-8 are skipped with a warning.
pub fn load_declarations(roots: &[PathBuf]) -> Result<Vec<Declaration>> {
    let mut declarations = Vec::new();

    for file in collect_sources(roots)? {
        match std::fs::read_to_string(&file) {
            Ok(source) => declarations.extend(read_declarations(&file, &source)),
            Err(err) => {
                tracing::warn!(file = %file.display(), error = %err, "skipping unreadable source");
            }
        }
    }

    tracing::debug!(count = declarations.len(), "loaded declarations");
    Ok(declarations)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry.wrap_err_with(|| format!("Failed to read directory {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .wrap_err_with(|| format!("Failed to inspect {}", path.display()))?;

        if file_type.is_dir() {
            if !is_skipped_dir(&path) {
                walk(&path, files)?;
            }
        } else if is_source_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_skipped_dir(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}

fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".cs") && !name.ends_with(".g.cs")
}
