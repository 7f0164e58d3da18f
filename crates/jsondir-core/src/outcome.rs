//! Resolution outcomes.
//!
//! Every resolution step answers with an [`Outcome`] inside a
//! [`ResolveResult`](crate::ResolveResult): either a value, or a request to
//! leave the entry out of its parent.

use std::fmt;
use std::path::PathBuf;

/// Exit status an executable uses to ask for its node to be omitted.
pub const SKIP_EXIT_STATUS: i32 = 65;

/// Why an entry is left out of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Symlink encountered while symlink-following is off.
    Symlink(PathBuf),
    /// Stripping the naming suffix left nothing to use as a key.
    EmptyKey(PathBuf),
    /// Executable exited with [`SKIP_EXIT_STATUS`].
    ExitRequested(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symlink(p) => write!(f, "skipping file entry {} (symlink)", p.display()),
            Self::EmptyKey(p) => write!(f, "skipping file entry {} (empty key)", p.display()),
            Self::ExitRequested(p) => write!(
                f,
                "skipping file entry {} (exited with status {SKIP_EXIT_STATUS})",
                p.display()
            ),
        }
    }
}

/// A resolved value, or a skip.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The entry produced a value.
    Value(T),
    /// The entry is omitted from its parent.
    Skip(SkipReason),
}

impl<T> Outcome<T> {
    /// The value, if there is one.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Skip(_) => None,
        }
    }

    /// True for [`Outcome::Skip`].
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}
