//! CLI error handling.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use jsondir_core::IgnoreError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Flags or environment could not be turned into a working setup.
    #[error("{0}")]
    Config(String),

    /// One or more paths failed to resolve. Each failure was already
    /// logged where it happened.
    #[error("{failed} of {total} paths failed")]
    Resolve {
        /// Failed path count.
        failed: usize,
        /// Path count.
        total: usize,
    },

    /// A resolved value has no JSON form.
    #[error("unable to marshal result {}: {source}", path.display())]
    Serialize {
        /// Path whose value failed.
        path: PathBuf,
        /// Serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing to stdout failed.
    #[error("unable to write output: {0}")]
    Write(#[from] io::Error),

    /// Process setup failed outside the resolver.
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E001",
            Self::Resolve { .. } => "E002",
            Self::Serialize { .. } => "E003",
            Self::Write(_) => "E004",
            Self::Other(_) => "E999",
        }
    }

    /// Numeric process status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Resolve { .. } => 1,
            Self::Serialize { .. } | Self::Write(_) => 3,
            Self::Other(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<IgnoreError> for CliError {
    fn from(err: IgnoreError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<jsondir_common_log::LogError> for CliError {
    fn from(err: jsondir_common_log::LogError) -> Self {
        Self::Config(err.to_string())
    }
}
