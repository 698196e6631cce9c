//! Error types for walking operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a walk.
///
/// Permission-denied listings are not errors; the walker prunes them.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Root path was pruned (unreadable or unsupported).
    #[error("Root path cannot be read: {path}")]
    RootUnavailable { path: PathBuf },
}

impl WalkError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
