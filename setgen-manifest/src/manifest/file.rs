use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A setgen.toml file with both raw content and parsed manifest.
///
/// Relative paths in the manifest are resolved against the directory
/// containing the file.
#[derive(Debug, Clone)]
pub struct SetgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl SetgenToml {
    /// Open and parse a setgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Open a setgen.toml file, falling back to the defaults when it does
    /// not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        Ok(Self {
            path: path.to_path_buf(),
            content: String::new(),
            manifest: Manifest::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when the defaults are in use).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory that relative manifest paths are resolved against.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Configured source directories, resolved against [`SetgenToml::root`].
    pub fn source_roots(&self) -> Vec<PathBuf> {
        self.manifest
            .project
            .sources
            .iter()
            .map(|source| self.root().join(source))
            .collect()
    }

    /// Configured output directory, resolved against [`SetgenToml::root`].
    pub fn output_dir(&self) -> PathBuf {
        self.root().join(&self.manifest.project.output)
    }
}
