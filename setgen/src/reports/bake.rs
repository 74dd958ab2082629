//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Declaration-level failures, embedded into their generated files.
    pub errors: Vec<String>,

    /// Warning messages from pipeline.
    pub warnings: Vec<String>,

    /// Number of settings containers found.
    pub containers: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// One entry per generated file.
    pub files: Vec<FileChange>,
    /// Generated files left over from earlier runs.
    pub stale: Vec<String>,
}

/// A generated file and what happened to it.
#[derive(Debug)]
pub struct FileChange {
    pub name: String,
    pub accessors: usize,
    /// The file carries an error comment instead of accessors.
    pub failed: bool,
    /// Whether the content on disk changed.
    pub changed: bool,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_diagnostics(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_diagnostics(out);

        if self.containers == 0 {
            out.preformatted("No settings containers found.");
            return;
        }

        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            if file.failed {
                out.list_item(&format!("! {} (error embedded)", file.name));
            } else if file.changed {
                out.added_item(&format!("{} ({} settings)", file.name, file.accessors));
            } else {
                out.list_item(&format!("{} (unchanged)", file.name));
            }
        }
        out.newline();
        out.key_value("Output", &written.output_dir.display().to_string());

        if !written.stale.is_empty() {
            out.newline();
            out.section("Stale files (run `setgen clean` to remove)");
            for name in &written.stale {
                out.removed_item(name);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        self.render_diagnostics(out);
        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report(result: GenerationResult) -> BakeReport {
        BakeReport {
            errors: vec!["settings file not found\n  --> Game.Broken".to_string()],
            warnings: Vec::new(),
            containers: 2,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("Assets/Generated"),
            files: vec![
                FileChange {
                    name: "Game_Broken_GlobalSettings.g.cs".to_string(),
                    accessors: 0,
                    failed: true,
                    changed: true,
                },
                FileChange {
                    name: "Game_Settings_GlobalSettings.g.cs".to_string(),
                    accessors: 4,
                    failed: false,
                    changed: true,
                },
            ],
            stale: vec!["Game_Old_GlobalSettings.g.cs".to_string()],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        let text = out.text();

        assert!(text.starts_with("error: settings file not found"));
        assert!(text.contains("  ! Game_Broken_GlobalSettings.g.cs (error embedded)"));
        assert!(text.contains("  + Game_Settings_GlobalSettings.g.cs (4 settings)"));
        assert!(text.contains("Output: Assets/Generated"));
        assert!(text.contains("  - Game_Old_GlobalSettings.g.cs"));
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "global_Settings_GlobalSettings.g.cs".to_string(),
                content: "// <auto-generated />".to_string(),
            }],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── global_Settings_GlobalSettings.g.cs ──");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }

    #[test]
    fn test_render_without_containers() {
        let report = BakeReport {
            errors: Vec::new(),
            warnings: Vec::new(),
            containers: 0,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("Generated"),
                files: Vec::new(),
                stale: Vec::new(),
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["No settings containers found."]);
    }
}
