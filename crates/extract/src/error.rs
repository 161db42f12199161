use derive_more::Display;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a file could not be read from disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IoFailure {
    #[display(fmt = "file not found")]
    Missing,

    #[display(fmt = "permission denied")]
    Permission,

    #[display(fmt = "I/O error")]
    Other,
}

impl IoFailure {
    /// Classify an I/O error kind
    pub fn from_kind(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => IoFailure::Missing,
            io::ErrorKind::PermissionDenied => IoFailure::Permission,
            _ => IoFailure::Other,
        }
    }
}

/// Errors raised while turning a file into lines
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(
        "cannot read {}: Word document support is unavailable (rebuild with the `docx` feature)",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("could not decode {}: {reason}", .path.display())]
    Undecodable { path: PathBuf, reason: String },

    #[error("error reading file {}: {failure}", .path.display())]
    Io {
        path: PathBuf,
        failure: IoFailure,
        #[source]
        source: io::Error,
    },
}

impl ExtractionError {
    /// Wrap an I/O error for the given path
    pub fn io(path: &Path, source: io::Error) -> Self {
        ExtractionError::Io {
            path: path.to_path_buf(),
            failure: IoFailure::from_kind(source.kind()),
            source,
        }
    }

    /// The file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            ExtractionError::UnsupportedFormat { path }
            | ExtractionError::Undecodable { path, .. }
            | ExtractionError::Io { path, .. } => path,
        }
    }

    /// The I/O classification, if this is an I/O failure
    pub fn io_failure(&self) -> Option<IoFailure> {
        match self {
            ExtractionError::Io { failure, .. } => Some(*failure),
            _ => None,
        }
    }
}
