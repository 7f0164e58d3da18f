//! Error types for tree resolution.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort resolution of a top-level path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Reading a file, listing a directory or probing metadata failed.
    #[error("{path}: {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An `@` file did not contain valid JSON.
    #[error("{path}: invalid embedded JSON: {source}")]
    InvalidEmbedded {
        /// The offending file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// An executable exited with a status other than 0 or the skip status.
    #[error("{path}: exited with status {status}")]
    ExitStatus {
        /// The executable.
        path: PathBuf,
        /// Observed exit status.
        status: i32,
    },

    /// An executable was terminated by a signal.
    #[error("{path}: terminated by signal")]
    Signaled {
        /// The executable.
        path: PathBuf,
    },

    /// Spawning or waiting on an executable failed.
    #[error("{path}: unable to run: {source}")]
    Spawn {
        /// The executable.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The scratch working directory could not be created.
    #[error("unable to create temporary directory: {source}")]
    TempDir {
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Build an IO error carrying the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The filesystem path the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. }
            | Self::InvalidEmbedded { path, .. }
            | Self::ExitStatus { path, .. }
            | Self::Signaled { path }
            | Self::Spawn { path, .. } => Some(path),
            Self::TempDir { .. } => None,
        }
    }

    /// Get error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "RESOLVE_IO_ERROR",
            Self::InvalidEmbedded { .. } => "RESOLVE_INVALID_EMBEDDED",
            Self::ExitStatus { .. } => "RESOLVE_EXIT_STATUS",
            Self::Signaled { .. } => "RESOLVE_SIGNALED",
            Self::Spawn { .. } => "RESOLVE_SPAWN_FAILED",
            Self::TempDir { .. } => "RESOLVE_TEMP_DIR",
        }
    }

    /// Exit status of the failed executable, if that is what failed.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            Self::ExitStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for resolution.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_path() {
        let err = ResolveError::ExitStatus {
            path: PathBuf::from("/data/gen"),
            status: 2,
        };
        assert_eq!(err.to_string(), "/data/gen: exited with status 2");
        assert_eq!(err.path(), Some(Path::new("/data/gen")));
        assert_eq!(err.exit_status(), Some(2));
        assert_eq!(err.error_code(), "RESOLVE_EXIT_STATUS");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ResolveError::io(
            "missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(&err, ResolveError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound));
        assert!(std::error::Error::source(&err).is_some());
    }
}
