use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for settings-definition operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("settings file not found at '{}'", path.display())]
    #[diagnostic(
        code(setgen::file_not_found),
        help("the path is resolved relative to the file declaring the attribute")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read settings file '{}'", path.display())]
    #[diagnostic(code(setgen::read_error))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings marker '{marker}' not found")]
    #[diagnostic(
        code(setgen::missing_marker),
        help("the settings block must start after '{marker}'; check [format].marker")
    )]
    MissingMarker {
        #[source_code]
        src: NamedSource<String>,
        marker: String,
    },

    #[error("No parameters found")]
    #[diagnostic(
        code(setgen::no_parameters),
        help("no '{key}' lines follow the settings marker")
    )]
    NoParameters {
        #[source_code]
        src: NamedSource<String>,
        #[label("settings block starts here")]
        span: SourceSpan,
        key: String,
    },

    #[error("Names and Types count mismatch ({names} names, {types} types)")]
    #[diagnostic(
        code(setgen::count_mismatch),
        help("every record needs both a name and a type line; the file may be corrupt")
    )]
    CountMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("settings block starts here")]
        span: SourceSpan,
        names: usize,
        types: usize,
    },
}

impl Error {
    /// Create a missing marker error with source context
    pub fn missing_marker(marker: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::MissingMarker {
            src: NamedSource::new(filename, src.to_string()),
            marker: marker.into(),
        })
    }

    /// Create a no-parameters error pointing at the settings marker
    pub fn no_parameters(
        key: impl Into<String>,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::NoParameters {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            key: key.into(),
        })
    }

    /// Create a count mismatch error pointing at the settings marker
    pub fn count_mismatch(
        names: usize,
        types: usize,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::CountMismatch {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            names,
            types,
        })
    }

    /// Whether this error came from locating or reading the file rather
    /// than from its content.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::Read { .. })
    }
}
