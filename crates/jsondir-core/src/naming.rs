//! Naming conventions carried by entry names.
//!
//! - `name[]` directory: aggregate children as an array.
//! - `name{}` directory: aggregate children as an object (the default, but
//!   lets a key itself end in `[]`, e.g. `odd[]{}` is the object `odd[]`).
//! - `name@` file: contents are embedded JSON.

use std::path::Path;

/// Suffix marking an array directory.
pub const ARRAY_SUFFIX: &str = "[]";
/// Suffix marking a forced object directory.
pub const OBJECT_SUFFIX: &str = "{}";
/// Suffix marking an embedded JSON file.
pub const EMBEDDED_SUFFIX: &str = "@";

/// Shape a directory aggregates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    /// Children in listing order.
    Array,
    /// Children keyed by name.
    Object,
}

impl AggregateKind {
    /// Shape selected by a directory's own name.
    pub fn of(dir_name: &str) -> Self {
        if dir_name.ends_with(ARRAY_SUFFIX) {
            Self::Array
        } else {
            Self::Object
        }
    }
}

/// Base name of a path, or the whole path when it has no final component
/// (`.`, `..`, `/`).
pub fn entry_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Key a directory contributes to its parent: its name without a trailing
/// `[]` or `{}`.
pub fn dir_key(name: &str) -> &str {
    name.strip_suffix(ARRAY_SUFFIX)
        .or_else(|| name.strip_suffix(OBJECT_SUFFIX))
        .unwrap_or(name)
}

/// Key a file contributes to its parent: its name without a trailing `@`.
pub fn file_key(name: &str) -> &str {
    name.strip_suffix(EMBEDDED_SUFFIX).unwrap_or(name)
}

/// Object key for a child entry.
pub fn child_key(name: &str, is_dir: bool) -> &str {
    if is_dir {
        dir_key(name)
    } else {
        file_key(name)
    }
}

/// Whether a file's contents are embedded JSON.
pub fn is_embedded(name: &str) -> bool {
    name.ends_with(EMBEDDED_SUFFIX)
}
