//! jsondir core - turn a directory tree into a structured value.
//!
//! Directory and file names carry structure, file contents carry data:
//!
//! - a directory is an object, or an array when its name ends in `[]`
//! - a file's contents are inferred as null, bool, int, float or string
//! - a file whose name ends in `@` holds embedded JSON
//! - an executable file, when enabled, is run and its output used instead
//!
//! Start with [`Resolver`].

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod exec;
pub mod ignore;
pub mod infer;
pub mod naming;
pub mod outcome;
pub mod resolve;
pub mod sink;
pub mod value;

// Re-exports
pub use context::ResolverConfig;
pub use error::{ResolveError, ResolveResult};
pub use exec::{ExecDir, ExecOptions};
pub use ignore::{IgnoreError, IgnoreFilter, DEFAULT_IGNORE_PATTERN};
pub use infer::infer;
pub use outcome::{Outcome, SkipReason, SKIP_EXIT_STATUS};
pub use resolve::Resolver;
pub use sink::DiagnosticSink;
pub use value::{Map, Value};
