//! jsondir CLI library
//!
//! Flag parsing, output rendering and the top-level loop over paths.

pub mod cli;
pub mod error;
pub mod output;

use std::io::Write;

use jsondir_core::{Outcome, Resolver};
use tracing::{debug, error, info};

pub use cli::Cli;
pub use error::CliError;

/// Resolve every path on the command line and write one JSON document per
/// resolved path to `out`.
///
/// A skipped path is logged and produces no output. A path that fails is
/// logged and the remaining paths are still processed; the run then
/// reports [`CliError::Resolve`]. Output failures stop the run at once.
pub async fn run<W: Write>(cli: &Cli, compact: bool, out: &mut W) -> Result<(), CliError> {
    let config = cli.resolver_config()?;
    debug!(
        ignore = ?config.ignore.patterns().collect::<Vec<_>>(),
        exec = config.allow_exec,
        exec_dir = ?config.exec.dir,
        "resolver configured"
    );
    let resolver = Resolver::new(config);

    let mut failed = 0;
    for path in &cli.paths {
        match resolver.resolve(path).await {
            Ok(Outcome::Value(value)) => {
                let rendered = output::render(&value, compact).map_err(|source| CliError::Serialize {
                    path: path.clone(),
                    source,
                })?;
                output::emit(out, &rendered)?;
            }
            Ok(Outcome::Skip(reason)) => info!("{reason}"),
            Err(e) => {
                error!(code = e.error_code(), "unable to walk path {}: {e}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Resolve {
            failed,
            total: cli.paths.len(),
        });
    }
    Ok(())
}
