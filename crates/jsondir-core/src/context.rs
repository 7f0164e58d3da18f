//! Resolver configuration.

use crate::exec::{ExecDir, ExecOptions};
use crate::ignore::IgnoreFilter;
use crate::sink::DiagnosticSink;

/// Options that shape how a tree is resolved.
///
/// Fixed for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Follow symlinks instead of skipping them.
    pub follow_symlinks: bool,
    /// Keep trailing whitespace in string values.
    pub keep_trailing_whitespace: bool,
    /// Run executable files and use their output.
    pub allow_exec: bool,
    /// How executables are run.
    pub exec: ExecOptions,
    /// Which directory children are never visited.
    pub ignore: IgnoreFilter,
}

impl ResolverConfig {
    /// Create new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set symlink following.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set trailing whitespace preservation.
    pub fn keep_trailing_whitespace(mut self, keep: bool) -> Self {
        self.keep_trailing_whitespace = keep;
        self
    }

    /// Enable or disable running executables.
    pub fn allow_exec(mut self, allow: bool) -> Self {
        self.allow_exec = allow;
        self
    }

    /// Set working directory policy for executables.
    pub fn exec_dir(mut self, dir: ExecDir) -> Self {
        self.exec.dir = dir;
        self
    }

    /// Set where executable stderr goes.
    pub fn diagnostics(mut self, sink: DiagnosticSink) -> Self {
        self.exec.diagnostics = sink;
        self
    }

    /// Set the ignore filter.
    pub fn ignore(mut self, filter: IgnoreFilter) -> Self {
        self.ignore = filter;
        self
    }
}
