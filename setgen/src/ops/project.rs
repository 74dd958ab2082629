//! A configured project with command-line overrides applied.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use setgen_codegen::pipeline::{Compilation, Pipeline, PipelineOptions};
use setgen_codegen_csharp::Emitter;
use setgen_manifest::{Manifest, Mode, SetgenToml};
use setgen_scan::load_declarations;

/// Everything a compilation pass needs to know about the project.
#[derive(Debug, Clone)]
pub struct Project {
    pub config_path: PathBuf,
    pub manifest: Manifest,
    pub source_roots: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

impl Project {
    pub fn new(setgen_toml: &SetgenToml) -> Self {
        Self {
            config_path: setgen_toml.path().to_path_buf(),
            manifest: setgen_toml.manifest().clone(),
            source_roots: setgen_toml.source_roots(),
            output_dir: setgen_toml.output_dir(),
        }
    }

    /// Override the configured accessor mode.
    pub fn with_mode(mut self, mode: Option<Mode>) -> Self {
        if let Some(mode) = mode {
            self.manifest.project.mode = mode;
        }
        self
    }

    /// Override the configured output directory.
    pub fn with_output(mut self, output: Option<&Path>) -> Self {
        if let Some(output) = output {
            self.output_dir = output.to_path_buf();
        }
        self
    }

    /// Read every source file and run the pipeline over it.
    pub fn compile(&self) -> Result<Compilation> {
        let declarations = load_declarations(&self.source_roots)
            .wrap_err("Failed to read C# sources")?;
        tracing::debug!(
            declarations = declarations.len(),
            mode = %self.manifest.project.mode,
            "compiling"
        );

        let pipeline = Pipeline::new(
            PipelineOptions::from_manifest(&self.manifest),
            Emitter::from_manifest(&self.manifest),
        );
        Ok(pipeline.run(&declarations))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_paths_follow_config_location() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("setgen.toml");
        fs::write(&config, "[project]\nsources = [\"Assets\"]\noutput = \"Assets/Generated\"\n").unwrap();

        let project = Project::new(&SetgenToml::open(&config).unwrap());
        assert_eq!(project.source_roots, [temp.path().join("Assets")]);
        assert_eq!(project.output_dir, temp.path().join("Assets/Generated"));
    }

    #[test]
    fn test_overrides() {
        let temp = TempDir::new().unwrap();
        let setgen_toml = SetgenToml::open_or_default(temp.path().join("setgen.toml")).unwrap();

        let project = Project::new(&setgen_toml)
            .with_mode(Some(Mode::Indirect))
            .with_output(Some(Path::new("out")));
        assert_eq!(project.manifest.project.mode, Mode::Indirect);
        assert_eq!(project.output_dir, PathBuf::from("out"));

        let project = Project::new(&setgen_toml).with_mode(None).with_output(None);
        assert_eq!(project.manifest.project.mode, Mode::Direct);
        assert_eq!(project.output_dir, temp.path().join("Generated"));
    }
}
