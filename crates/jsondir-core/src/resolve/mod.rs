//! Path value resolution.
//!
//! [`Resolver::resolve`] is the recursive hub: it probes an entry and picks
//! the strategy that produces its value.
//!
//! 1. Symlink while following is off: skip.
//! 2. Directory: aggregate its children.
//! 3. Executable, when enabled: run it and use its output as contents.
//! 4. Otherwise read the file.
//! 5. `@` files are parsed as JSON, everything else goes through
//!    [`infer`](crate::infer::infer).

mod aggregate;
mod entry;

use std::fs;
use std::path::Path;

use tracing::{debug, error, instrument};

use crate::context::ResolverConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::exec;
use crate::infer::infer;
use crate::naming;
use crate::outcome::{Outcome, SkipReason};
use crate::value::Value;
use entry::{Entry, EntryKind};

/// Turns filesystem entries into values.
///
/// # Example
///
/// ```no_run
/// use jsondir_core::{Outcome, Resolver, ResolverConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = Resolver::new(ResolverConfig::new().allow_exec(true));
/// match resolver.resolve("config{}".as_ref()).await? {
///     Outcome::Value(value) => println!("{}", serde_json::to_string(&value)?),
///     Outcome::Skip(reason) => eprintln!("{reason}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with fixed configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the entry at `path`.
    ///
    /// Top-level paths are not checked against the ignore filter; only
    /// directory children are.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn resolve(&self, path: &Path) -> ResolveResult<Outcome<Value>> {
        let entry = Entry::probe(path, self.config.follow_symlinks)?;

        let raw = match entry.kind {
            EntryKind::Symlink => {
                return Ok(Outcome::Skip(SkipReason::Symlink(entry.path)));
            }
            EntryKind::Directory => return self.aggregate(&entry).await,
            EntryKind::Executable if self.config.allow_exec => {
                match exec::invoke(path, &self.config.exec).await {
                    Ok(Outcome::Value(stdout)) => stdout,
                    Ok(Outcome::Skip(reason)) => return Ok(Outcome::Skip(reason)),
                    Err(e) => {
                        error!(code = e.error_code(), error = %e, "error executing {}", path.display());
                        return Err(e);
                    }
                }
            }
            EntryKind::Executable | EntryKind::File => {
                fs::read(path).map_err(|e| ResolveError::io(path, e))?
            }
        };

        let value = self.decode(&entry, &raw)?;
        debug!(bytes = raw.len(), kind = value.kind(), "decoded contents");
        Ok(Outcome::Value(value))
    }

    fn decode(&self, entry: &Entry, raw: &[u8]) -> ResolveResult<Value> {
        if naming::is_embedded(&entry.name) {
            return serde_json::from_slice(raw).map_err(|source| ResolveError::InvalidEmbedded {
                path: entry.path.clone(),
                source,
            });
        }
        Ok(infer(raw, self.config.keep_trailing_whitespace))
    }
}
