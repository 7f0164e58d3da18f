//! Options for running executables.

use crate::sink::DiagnosticSink;

/// Working directory an executable runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecDir {
    /// A fresh temporary directory, removed afterwards.
    #[default]
    Temp,
    /// The directory containing the executable.
    OwnDir,
    /// Whatever directory this process runs in.
    Inherit,
}

impl ExecDir {
    /// Pick a policy from the two command-line switches.
    ///
    /// Running in the executable's own directory wins and implies no
    /// temporary directory.
    pub fn from_flags(in_temp_dir: bool, in_own_dir: bool) -> Self {
        if in_own_dir {
            Self::OwnDir
        } else if in_temp_dir {
            Self::Temp
        } else {
            Self::Inherit
        }
    }
}

/// Options for executable invocation.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory policy.
    pub dir: ExecDir,
    /// Where prefixed child stderr goes.
    pub diagnostics: DiagnosticSink,
}

impl ExecOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory policy.
    pub fn dir(mut self, dir: ExecDir) -> Self {
        self.dir = dir;
        self
    }

    /// Set the diagnostic sink.
    pub fn diagnostics(mut self, sink: DiagnosticSink) -> Self {
        self.diagnostics = sink;
        self
    }
}
