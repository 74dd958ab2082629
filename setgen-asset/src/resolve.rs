//! Locating and reading settings-definition files.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// A settings-definition file located on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSource {
    /// Absolute, normalized path of the file.
    pub path: PathBuf,
    /// Full text content.
    pub content: String,
}

/// Resolve a settings-definition path relative to the file declaring it.
///
/// The relative path is joined onto the declaring file's directory, made
/// absolute against the current directory and normalized lexically.
/// Backslashes in `relative` are read as separators on every platform.
pub fn resolve(declaring_file: &Path, relative: &str) -> Result<SettingsSource> {
    let base = declaring_file.parent().unwrap_or_else(|| Path::new(""));
    let joined = base.join(relative.replace('\\', "/"));
    let absolute = if joined.is_absolute() {
        joined
    } else {
        std::env::current_dir()
            .map_err(|source| {
                Box::new(Error::Read {
                    path: joined.clone(),
                    source,
                })
            })?
            .join(joined)
    };
    let path = normalize_path(&absolute);
    tracing::debug!(path = %path.display(), "resolved settings file");

    SettingsSource::read(path)
}

/// Normalize `.` and `..` components without touching the file system.
///
/// `..` at the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                out.push(component)
            }
        }
    }
    out
}

impl SettingsSource {
    /// Build a source from in-memory content, e.g. for previews and tests.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a settings-definition file at a known path.
    ///
    /// A leading byte order mark is dropped.
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Box::new(Error::NotFound { path }));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(Error::Read {
                path: path.clone(),
                source,
            })
        })?;
        let content = match content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        };

        Ok(Self { path, content })
    }

    /// The file name used in diagnostics.
    pub fn filename(&self) -> String {
        self.path.display().to_string()
    }
}
