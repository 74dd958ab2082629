//! The result of one compilation pass.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Serialize;
use setgen_core::{File, WriteResult};

use super::Diagnostic;

/// Suffix shared by every generated file.
pub const GENERATED_SUFFIX: &str = ".g.cs";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub name: String,
    #[serde(skip)]
    pub content: String,
    /// Declaration the file was generated for, e.g. `Game.Settings`.
    pub declaration: String,
    /// File declaring the container.
    pub source: PathBuf,
    /// Settings-definition file, when it could be resolved.
    pub origin: Option<PathBuf>,
    pub accessors: usize,
    /// Whether the file carries a declaration-level error instead of accessors.
    pub failed: bool,
}

/// A generated file after [`Compilation::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Generated files and diagnostics from one [`Pipeline::run`](super::Pipeline::run).
///
/// Files are ordered by name, so the same inputs always produce the same
/// compilation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Compilation {
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Files whose declaration could not be generated.
    pub fn failed_files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(|file| file.failed)
    }

    /// Look up a generated file by name.
    pub fn file(&self, name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.name == name)
    }

    /// Write every generated file into `output_dir`.
    pub fn write(&self, output_dir: &Path) -> Result<Vec<WrittenFile>> {
        self.files
            .iter()
            .map(|generated| {
                let file = File::new(output_dir.join(&generated.name), generated.content.as_str());
                let result = file.write()?;
                tracing::debug!(path = %file.path().display(), ?result, "wrote generated file");
                Ok(WrittenFile {
                    path: file.path().to_path_buf(),
                    result,
                })
            })
            .collect()
    }

    /// Generated files in `output_dir` that this compilation no longer
    /// produces, sorted by path.
    ///
    /// Only the top level of `output_dir` is considered. A missing
    /// directory has no orphans.
    pub fn orphans(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        if !output_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(output_dir)
            .wrap_err_with(|| format!("Failed to read directory {}", output_dir.display()))?;

        let mut orphans = Vec::new();
        for entry in entries {
            let entry = entry
                .wrap_err_with(|| format!("Failed to read directory {}", output_dir.display()))?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if path.is_file() && name.ends_with(GENERATED_SUFFIX) && self.file(name).is_none() {
                orphans.push(path);
            }
        }

        orphans.sort();
        Ok(orphans)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn generated(name: &str, content: &str) -> GeneratedFile {
        GeneratedFile {
            name: name.to_string(),
            content: content.to_string(),
            declaration: "Settings".to_string(),
            source: PathBuf::from("Settings.cs"),
            origin: None,
            accessors: 0,
            failed: false,
        }
    }

    #[test]
    fn test_write_then_rewrite_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("Generated");
        let compilation = Compilation {
            files: vec![generated("global_Settings_GlobalSettings.g.cs", "// a\n")],
            diagnostics: Vec::new(),
        };

        let first = compilation.write(&output).unwrap();
        assert_eq!(first[0].result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(output.join("global_Settings_GlobalSettings.g.cs")).unwrap(),
            "// a\n"
        );

        let second = compilation.write(&output).unwrap();
        assert_eq!(second[0].result, WriteResult::Unchanged);
    }

    #[test]
    fn test_serialize_skips_content() {
        let json = serde_json::to_value(generated("a.g.cs", "// body")).unwrap();
        assert_eq!(json["name"], "a.g.cs");
        assert_eq!(json["failed"], false);
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_orphans() {
        let temp = TempDir::new().unwrap();
        let output = temp.path();
        fs::write(output.join("global_Kept_GlobalSettings.g.cs"), "").unwrap();
        fs::write(output.join("global_Old_GlobalSettings.g.cs"), "").unwrap();
        fs::write(output.join("Handwritten.cs"), "").unwrap();
        fs::create_dir(output.join("nested.g.cs")).unwrap();

        let compilation = Compilation {
            files: vec![generated("global_Kept_GlobalSettings.g.cs", "")],
            diagnostics: Vec::new(),
        };

        let orphans = compilation.orphans(output).unwrap();
        assert_eq!(orphans, [output.join("global_Old_GlobalSettings.g.cs")]);
    }

    #[test]
    fn test_orphans_of_missing_dir() {
        let temp = TempDir::new().unwrap();
        let compilation = Compilation::default();
        assert!(compilation.orphans(&temp.path().join("missing")).unwrap().is_empty());
    }
}
