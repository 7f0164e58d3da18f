//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueHint};
use jsondir_common_log::LogFormat;
use jsondir_core::{DiagnosticSink, ExecDir, IgnoreFilter, ResolverConfig};

use crate::error::CliError;

/// jsondir - convert a directory tree into JSON
///
/// Directories become objects, or arrays when their name ends in `[]`.
/// Files become scalars inferred from their contents, or embedded JSON
/// when their name ends in `@`. With `-x`, executables are run and their
/// output used; an executable exiting with status 65 is omitted.
#[derive(Debug, Parser)]
#[command(name = "jsondir", author, version, about, long_about = None)]
pub struct Cli {
    /// Log progress and forward executable stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit compact JSON [default: compact unless stdout is a terminal]
    #[arg(
        short,
        long,
        env = "JSONDIR_COMPACT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        value_name = "BOOL"
    )]
    pub compact: Option<bool>,

    /// Follow symlinks instead of skipping them
    #[arg(short = 's', long, env = "JSONDIR_FOLLOW_SYMLINKS")]
    pub follow_symlinks: bool,

    /// Keep trailing whitespace in string values
    #[arg(long = "keep-whitespace", visible_alias = "ws", env = "JSONDIR_KEEP_WHITESPACE")]
    pub keep_whitespace: bool,

    /// Run executable files and use their output
    #[arg(short = 'x', long = "exec", env = "JSONDIR_EXEC")]
    pub exec: bool,

    /// Run executables in the current directory, not a temporary one
    #[arg(long = "no-temp-exec", visible_alias = "nt", env = "JSONDIR_NO_TEMP_EXEC")]
    pub no_temp_exec: bool,

    /// Run executables in their own directory (implies --no-temp-exec)
    #[arg(long = "relative-exec", visible_alias = "rx", env = "JSONDIR_RELATIVE_EXEC")]
    pub relative_exec: bool,

    /// Glob of directory children to skip; replaces the default `.*`
    #[arg(short, long = "ignore", value_name = "PATTERN", action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, env = "JSONDIR_LOG_FORMAT", value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    /// Paths to convert
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Working directory policy for executables.
    pub fn exec_dir(&self) -> ExecDir {
        ExecDir::from_flags(!self.no_temp_exec, self.relative_exec)
    }

    /// Build resolver configuration from the flags.
    pub fn resolver_config(&self) -> Result<ResolverConfig, CliError> {
        let ignore = IgnoreFilter::new(&self.ignore)?;
        let diagnostics = if self.verbose > 0 {
            DiagnosticSink::Stderr
        } else {
            DiagnosticSink::Discard
        };

        Ok(ResolverConfig::new()
            .follow_symlinks(self.follow_symlinks)
            .keep_trailing_whitespace(self.keep_whitespace)
            .allow_exec(self.exec)
            .exec_dir(self.exec_dir())
            .diagnostics(diagnostics)
            .ignore(ignore))
    }
}

/// Parse a log format name
pub fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::parse(s).ok_or_else(|| format!("Invalid log format: {s} (expected pretty, compact or json)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jsondir").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["tree"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.compact, None);
        assert!(!cli.exec);
        assert_eq!(cli.exec_dir(), ExecDir::Temp);
        assert_eq!(cli.paths, vec![PathBuf::from("tree")]);
    }

    #[test]
    fn test_short_aliases() {
        let cli = parse(&["-vv", "-c", "-s", "--ws", "-x", "--nt", "a", "b"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.compact, Some(true));
        assert!(cli.follow_symlinks);
        assert!(cli.keep_whitespace);
        assert!(cli.exec);
        assert_eq!(cli.exec_dir(), ExecDir::Inherit);
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn test_relative_exec_implies_no_temp() {
        assert_eq!(parse(&["--rx"]).exec_dir(), ExecDir::OwnDir);
        assert_eq!(parse(&["--relative-exec", "--nt"]).exec_dir(), ExecDir::OwnDir);
    }

    #[test]
    fn test_compact_explicit_false() {
        let cli = parse(&["--compact=false", "tree"]);
        assert_eq!(cli.compact, Some(false));
        assert_eq!(cli.paths, vec![PathBuf::from("tree")]);
    }

    #[test]
    fn test_ignore_is_repeatable() {
        let cli = parse(&["-i", "*.bak", "--ignore", "tmp/*"]);
        assert_eq!(cli.ignore, vec!["*.bak", "tmp/*"]);
        let config = cli.resolver_config().unwrap();
        assert_eq!(config.ignore.len(), 2);
    }

    #[test]
    fn test_invalid_ignore_is_config_error() {
        let cli = parse(&["-i", "[", "tree"]);
        let err = cli.resolver_config().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_verbose_enables_diagnostics() {
        assert!(!parse(&[]).resolver_config().unwrap().exec.diagnostics.is_enabled());
        assert!(parse(&["-v"]).resolver_config().unwrap().exec.diagnostics.is_enabled());
    }

    #[test]
    fn test_log_format() {
        assert_eq!(parse(&["--log-format", "json"]).log_format, Some(LogFormat::Json));
        assert!(Cli::try_parse_from(["jsondir", "--log-format", "xml"]).is_err());
    }
}
