//! Filesystem entry probing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ResolveError, ResolveResult};
use crate::exec::is_executable;
use crate::naming;

/// What an entry is, as far as resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    /// A symlink that is not being followed.
    Symlink,
    Directory,
    Executable,
    File,
}

/// A probed filesystem entry.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
    pub(crate) kind: EntryKind,
}

impl Entry {
    /// Inspect `path` without following a final symlink unless asked to.
    pub(crate) fn probe(path: &Path, follow_symlinks: bool) -> ResolveResult<Self> {
        let io = |e| ResolveError::io(path, e);

        let mut meta = fs::symlink_metadata(path).map_err(io)?;
        let kind = if meta.file_type().is_symlink() && !follow_symlinks {
            EntryKind::Symlink
        } else {
            if meta.file_type().is_symlink() {
                meta = fs::metadata(path).map_err(io)?;
            }
            if meta.is_dir() {
                EntryKind::Directory
            } else if is_executable(&meta) {
                EntryKind::Executable
            } else {
                EntryKind::File
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            name: naming::entry_name(path),
            kind,
        })
    }
}

/// A directory child in listing order.
#[derive(Debug, Clone)]
pub(crate) struct Child {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
    is_dir: bool,
    is_symlink: bool,
}

impl Child {
    /// Whether the child counts as a directory for key computation.
    ///
    /// A symlink counts by its target only when links are followed. A
    /// dangling link is not a directory; resolving it reports the error.
    pub(crate) fn is_dir(&self, follow_symlinks: bool) -> bool {
        if self.is_symlink && follow_symlinks {
            fs::metadata(&self.path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            self.is_dir
        }
    }
}

/// List the immediate children of `dir` in the order the filesystem
/// returns them.
pub(crate) fn list_children(dir: &Path) -> ResolveResult<Vec<Child>> {
    let io = |e| ResolveError::io(dir, e);

    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ResolveError::io(&path, e))?;
        children.push(Child {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir: file_type.is_dir(),
            is_symlink: file_type.is_symlink(),
        });
    }
    Ok(children)
}
