//! Working directory for a single executable run.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, error};

use super::options::ExecDir;
use crate::error::{ResolveError, ResolveResult};

const TEMP_PREFIX: &str = "jsondir-exec";

/// Directory a child runs in, held for the duration of the run.
///
/// A scratch directory is removed by [`WorkDir::release`]; dropping the
/// value without releasing it still removes it, silently.
#[derive(Debug)]
pub(crate) enum WorkDir {
    Scratch(TempDir),
    Fixed(PathBuf),
    Inherited,
}

impl WorkDir {
    pub(crate) fn acquire(policy: ExecDir, program: &Path) -> ResolveResult<Self> {
        match policy {
            ExecDir::Temp => {
                let dir = tempfile::Builder::new()
                    .prefix(TEMP_PREFIX)
                    .tempdir()
                    .map_err(|source| ResolveError::TempDir { source })?;
                debug!(dir = %dir.path().display(), "created scratch directory");
                Ok(Self::Scratch(dir))
            }
            ExecDir::OwnDir => Ok(program
                .parent()
                .map(|p| Self::Fixed(p.to_path_buf()))
                .unwrap_or(Self::Inherited)),
            ExecDir::Inherit => Ok(Self::Inherited),
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Self::Scratch(dir) => Some(dir.path()),
            Self::Fixed(path) => Some(path),
            Self::Inherited => None,
        }
    }

    /// Remove a scratch directory, logging rather than failing.
    pub(crate) fn release(self) {
        if let Self::Scratch(dir) = self {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                error!(dir = %path.display(), error = %e, "unable to remove scratch directory");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_removed_on_release() {
        let work = WorkDir::acquire(ExecDir::Temp, Path::new("/bin/true")).unwrap();
        let path = work.path().unwrap().to_path_buf();
        assert!(path.is_dir());
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(TEMP_PREFIX)));
        work.release();
        assert!(!path.exists());
    }

    #[test]
    fn test_own_dir_is_parent() {
        let work = WorkDir::acquire(ExecDir::OwnDir, Path::new("/data/tree/gen")).unwrap();
        assert_eq!(work.path(), Some(Path::new("/data/tree")));
    }

    #[test]
    fn test_inherit_has_no_dir() {
        let work = WorkDir::acquire(ExecDir::Inherit, Path::new("/data/gen")).unwrap();
        assert_eq!(work.path(), None);
    }
}
