//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use jsondir_test_utils::TempTree;

/// Test context with a fixture tree
pub struct TestContext {
    pub tree: TempTree,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            tree: TempTree::new(),
        }
    }

    /// Add a regular file
    pub fn with_file(self, rel: &str, contents: &str) -> Self {
        self.tree.file(rel, contents);
        self
    }

    /// Add an executable script
    pub fn with_script(self, rel: &str, script: &str) -> Self {
        self.tree.executable(rel, script);
        self
    }

    /// Get path to the tree root
    pub fn path(&self) -> &Path {
        self.tree.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.tree.join(rel)
    }

    /// Create a command running inside the tree with a clean environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("jsondir").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("JSONDIR_LOG_LEVEL")
            .env_remove("JSONDIR_LOG_FORMAT")
            .env_remove("JSONDIR_LOG_FILE")
            .env_remove("JSONDIR_LOG_SOURCE")
            .env_remove("JSONDIR_LOG_SPANS")
            .env_remove("JSONDIR_COMPACT")
            .env_remove("JSONDIR_EXEC")
            .env_remove("JSONDIR_FOLLOW_SYMLINKS")
            .env_remove("JSONDIR_KEEP_WHITESPACE")
            .env_remove("JSONDIR_NO_TEMP_EXEC")
            .env_remove("JSONDIR_RELATIVE_EXEC")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_stderr_contains(&self, text: &str);
    fn assert_exit_code(&self, code: i32);
    fn stdout_lines(&self) -> Vec<String>;
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr did not contain '{}'\nstderr: {}",
            text,
            stderr
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}, got {:?}\nstderr: {}",
            code,
            self.status.code(),
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// JSON output assertions
pub mod json {
    use serde_json::Value;

    pub fn parse_output(output: &[u8]) -> Value {
        serde_json::from_slice(output).expect("Failed to parse JSON output")
    }
}
