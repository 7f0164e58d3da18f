//! Running executable files and capturing their output.
//!
//! An executable's standard output becomes the raw contents of its node.
//! Standard error is forwarded, line-prefixed, to the configured
//! [`DiagnosticSink`](crate::DiagnosticSink). Exit status 0 is success,
//! [`SKIP_EXIT_STATUS`] omits the node, anything else is an error.

mod options;
mod prefix;
mod workdir;

pub use options::{ExecDir, ExecOptions};
pub use prefix::PrefixWriter;

use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::{ChildStderr, ChildStdout, Command};
use tracing::{debug, info, instrument, warn};

use crate::error::{ResolveError, ResolveResult};
use crate::outcome::{Outcome, SkipReason, SKIP_EXIT_STATUS};
use workdir::WorkDir;

const STDERR_CHUNK: usize = 8 * 1024;

/// Whether `meta` describes a file with any execute bit set.
#[cfg(unix)]
pub fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

/// Whether `meta` describes a file with any execute bit set.
#[cfg(not(unix))]
pub fn is_executable(_meta: &std::fs::Metadata) -> bool {
    false
}

/// Run the executable at `path` with no arguments and empty stdin.
///
/// Returns its standard output, or a skip if it exited with
/// [`SKIP_EXIT_STATUS`]. The scratch directory, when the policy uses one,
/// is removed before returning on every path.
#[instrument(skip(path, options), fields(path = %path.display()))]
pub async fn invoke(path: &Path, options: &ExecOptions) -> ResolveResult<Outcome<Vec<u8>>> {
    let program = absolute(path)?;
    let workdir = WorkDir::acquire(options.dir, &program)?;

    debug!(program = %program.display(), cwd = ?workdir.path(), "running executable");
    let run = run(&program, path, workdir.path(), options).await;
    workdir.release();
    let (status, stdout) = run?;

    match status.code() {
        Some(0) => Ok(Outcome::Value(stdout)),
        Some(SKIP_EXIT_STATUS) => {
            info!(status = SKIP_EXIT_STATUS, "exited with status {SKIP_EXIT_STATUS}");
            Ok(Outcome::Skip(SkipReason::ExitRequested(path.to_path_buf())))
        }
        Some(status) => {
            info!(status, "exited with status {status}");
            Err(ResolveError::ExitStatus {
                path: path.to_path_buf(),
                status,
            })
        }
        None => Err(ResolveError::Signaled {
            path: path.to_path_buf(),
        }),
    }
}

/// Make `path` absolute against the current directory without touching
/// symlinks.
fn absolute(path: &Path) -> ResolveResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| ResolveError::io(path, e))
}

async fn run(
    program: &Path,
    label: &Path,
    cwd: Option<&Path>,
    options: &ExecOptions,
) -> ResolveResult<(ExitStatus, Vec<u8>)> {
    let spawn_error = |source: io::Error| ResolveError::Spawn {
        path: label.to_path_buf(),
        source,
    };

    let mut cmd = Command::new(program);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(spawn_error)?;
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let mut writer = PrefixWriter::new(options.diagnostics.clone(), &label.display().to_string());
    let (stdout, drained) = tokio::join!(read_stdout(stdout), forward_stderr(stderr, &mut writer));

    let status = child.wait().await.map_err(spawn_error)?;

    if let Err(e) = writer.finish() {
        warn!(error = %e, "unable to forward diagnostics");
    }
    drained.map_err(spawn_error)?;
    let stdout = stdout.map_err(spawn_error)?;

    Ok((status, stdout))
}

async fn read_stdout(stdout: Option<ChildStdout>) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    if let Some(mut stdout) = stdout {
        stdout.read_to_end(&mut content).await?;
    }
    Ok(content)
}

async fn forward_stderr(stderr: Option<ChildStderr>, writer: &mut PrefixWriter) -> io::Result<()> {
    let Some(mut stderr) = stderr else {
        return Ok(());
    };
    let mut chunk = vec![0u8; STDERR_CHUNK];
    loop {
        let n = stderr.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        writer.push(&chunk[..n]);
    }
}
