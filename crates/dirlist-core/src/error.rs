//! Error types for listing operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a directory.
///
/// These never escape the engine facade: every failure degrades to a
/// root-sentinel fallback or a skipped entry plus a recorded message.
#[derive(Debug, Error)]
pub enum ListError {
    /// Path not found.
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied for a path.
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create an I/O error with path context, classified by error kind.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}
