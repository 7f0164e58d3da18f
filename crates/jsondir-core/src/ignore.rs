//! Ignore patterns for directory children.

use std::borrow::Cow;
use std::path::{Component, Path, MAIN_SEPARATOR};

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;

/// Pattern used when the caller supplies none: dot-files.
pub const DEFAULT_IGNORE_PATTERN: &str = ".*";

/// Shell-glob semantics: `*` stays within one path component and a
/// leading dot needs no special handling.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// An ignore pattern failed to compile.
#[derive(Debug, Error)]
#[error("invalid ignore pattern {pattern:?}: {source}")]
pub struct IgnoreError {
    /// The pattern as given.
    pub pattern: String,
    /// Compile error.
    #[source]
    pub source: PatternError,
}

#[derive(Debug, Clone)]
struct Rule {
    pattern: Pattern,
    full_path: bool,
}

/// Decides which directory children are never visited.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    rules: Vec<Rule>,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        let rules = Pattern::new(DEFAULT_IGNORE_PATTERN)
            .into_iter()
            .map(|pattern| Rule {
                pattern,
                full_path: false,
            })
            .collect();
        Self { rules }
    }
}

impl IgnoreFilter {
    /// A filter that ignores nothing.
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a filter from user patterns.
    ///
    /// An empty list yields the default dot-file filter. A non-empty list
    /// replaces the default. Empty strings are dropped.
    pub fn new<I, S>(patterns: I) -> Result<Self, IgnoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<S> = patterns.into_iter().collect();
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let mut rules = Vec::with_capacity(patterns.len());
        for raw in &patterns {
            let raw = raw.as_ref();
            if raw.is_empty() {
                continue;
            }
            let pattern = Pattern::new(raw).map_err(|source| IgnoreError {
                pattern: raw.to_string(),
                source,
            })?;
            rules.push(Rule {
                pattern,
                full_path: raw.contains(MAIN_SEPARATOR) || raw.contains('/'),
            });
        }
        Ok(Self { rules })
    }

    /// Whether the entry at `path` should be skipped.
    ///
    /// Patterns containing a separator are matched against the lexically
    /// cleaned path (`./tree//x` is tested as `tree/x`), others against the
    /// base name.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let name = path.file_name().map(|n| n.to_string_lossy());
        let full = clean(path);

        self.rules.iter().any(|rule| {
            let subject = if rule.full_path {
                full.as_ref()
            } else {
                match &name {
                    Some(n) => n.as_ref(),
                    None => full.as_ref(),
                }
            };
            rule.pattern.matches_with(subject, MATCH_OPTIONS)
        })
    }

    /// Number of active patterns.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when nothing is ignored.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The active patterns, for logging.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.pattern.as_str())
    }
}

/// Lexical cleanup: drops `.` and empty components and folds `name/..`.
/// The file system is never consulted.
fn clean(path: &Path) -> Cow<'_, str> {
    let mut rooted = false;
    let mut parts: Vec<Cow<'_, str>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => parts.push(prefix.as_os_str().to_string_lossy()),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push(Cow::Borrowed(".."));
                }
            }
            Component::Normal(part) => parts.push(part.to_string_lossy()),
        }
    }

    let joined = parts.join(&MAIN_SEPARATOR.to_string());
    match (rooted, joined.is_empty()) {
        (true, _) => Cow::Owned(format!("{MAIN_SEPARATOR}{joined}")),
        (false, true) => Cow::Borrowed("."),
        (false, false) => Cow::Owned(joined),
    }
}
