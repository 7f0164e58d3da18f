//! jsondir - convert a directory tree into JSON
//!
//! Main entry point for the `jsondir` binary.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use is_terminal::IsTerminal;
use jsondir_cli::{run, Cli, CliError};
use jsondir_common_log::LogConfig;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        eprintln!("jsondir: {e}");
        return e.exit_code();
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, CliError::Resolve { .. }) {
                error!("{e}");
            }
            e.exit_code()
        }
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    // The walk is sequential; one thread keeps output order and logs in step.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("unable to start runtime")?;

    let stdout = io::stdout();
    let compact = cli.compact.unwrap_or_else(|| !stdout.is_terminal());
    let mut out = stdout.lock();

    runtime.block_on(run(cli, compact, &mut out))
}

fn init_tracing(cli: &Cli) -> Result<(), CliError> {
    let mut config = LogConfig::from_env()
        .verbosity(cli.verbose)
        .ansi(io::stderr().is_terminal());
    if let Some(format) = cli.log_format {
        config = config.format(format);
    }
    jsondir_common_log::init(config)?;
    Ok(())
}
