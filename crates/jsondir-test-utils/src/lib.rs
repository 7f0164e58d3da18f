//! Test utilities for jsondir crates.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// A throwaway directory tree for building fixtures.
///
/// Paths passed to the builder methods are relative to the root; missing
/// parent directories are created. Everything is removed on drop.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { dir: temp_dir() }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree. Nothing is created.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a directory.
    pub fn dir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).expect("Failed to create fixture dir");
        path
    }

    /// Write a regular file.
    pub fn file(&self, rel: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(rel);
        self.ensure_parent(&path);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Write a file and mark it executable.
    ///
    /// The file is closed before its mode changes so it can be run
    /// straight away.
    #[cfg(unix)]
    pub fn executable(&self, rel: impl AsRef<Path>, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.file(rel, script);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fixture executable");
        path
    }

    /// Create a symlink at `rel` pointing to `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: impl AsRef<Path>, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.join(rel);
        self.ensure_parent(&path);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create fixture symlink");
        path
    }

    fn ensure_parent(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
