//! End-to-end tests for the `jsondir` binary.

#![cfg(unix)]

mod common;

use common::{json, OutputAssertions, TestContext};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_help() {
    TestContext::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--follow-symlinks"))
        .stdout(predicate::str::contains("--relative-exec"));
}

#[test]
fn test_object_and_array() {
    let ctx = TestContext::new()
        .with_file("obj{}/name", "hi\n")
        .with_file("obj{}/tags[]/1", "x")
        .with_file("obj{}/tags[]/2", "y")
        .with_file("obj{}/count", "010");

    let tags: Vec<String> = std::fs::read_dir(ctx.join("obj{}/tags[]"))
        .unwrap()
        .map(|e| std::fs::read_to_string(e.unwrap().path()).unwrap())
        .collect();

    let output = ctx.command().arg("obj{}").output().unwrap();
    output.assert_success();
    assert_eq!(
        json::parse_output(&output.stdout),
        json!({"name": "hi", "tags": tags, "count": 8})
    );
}

#[test]
fn test_compact_by_default_when_piped() {
    let ctx = TestContext::new().with_file("list[]/a", "1");

    ctx.command()
        .arg("list[]")
        .assert()
        .success()
        .stdout("[1]\n");
}

#[test]
fn test_pretty_output_uses_tabs() {
    let ctx = TestContext::new().with_file("obj/a", "1");

    ctx.command()
        .args(["--compact=false", "obj"])
        .assert()
        .success()
        .stdout("{\n\t\"a\": 1\n}\n");
}

#[test]
fn test_compact_from_env() {
    let ctx = TestContext::new().with_file("obj/a", "1");

    ctx.command()
        .env("JSONDIR_COMPACT", "false")
        .arg("obj")
        .assert()
        .success()
        .stdout(predicate::str::contains("\t\"a\": 1"));
}

#[test]
fn test_multiple_paths_one_line_each() {
    let ctx = TestContext::new()
        .with_file("a", "true")
        .with_file("b@", r#"{"k": null}"#);

    let output = ctx.command().args(["a", "b@"]).output().unwrap();
    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["true", r#"{"k":null}"#]);
}

#[test]
fn test_dot_files_ignored_by_default() {
    let ctx = TestContext::new()
        .with_file("obj/.git", "x")
        .with_file("obj/a", "1");

    ctx.command().arg("obj").assert().success().stdout("{\"a\":1}\n");
}

#[test]
fn test_ignore_pattern_replaces_default() {
    let ctx = TestContext::new()
        .with_file("obj/.dot", "x")
        .with_file("obj/a.bak", "1");

    ctx.command()
        .args(["-i", "*.bak", "obj"])
        .assert()
        .success()
        .stdout("{\".dot\":\"x\"}\n");
}

#[test]
fn test_invalid_ignore_pattern_exits_2() {
    let ctx = TestContext::new().with_file("a", "1");

    let output = ctx.command().args(["-i", "[", "a"]).output().unwrap();
    output.assert_exit_code(2);
    output.assert_stderr_contains("invalid ignore pattern");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_embedded_json_fails_but_continues() {
    let ctx = TestContext::new()
        .with_file("bad@", "{a:1}")
        .with_file("good", "2");

    let output = ctx.command().args(["bad@", "good"]).output().unwrap();
    output.assert_exit_code(1);
    output.assert_stderr_contains("unable to walk path bad@");
    assert_eq!(output.stdout_lines(), vec!["2"]);
}

#[test]
fn test_executables_need_flag() {
    let ctx = TestContext::new().with_script("gen", "#!/bin/sh\necho 42\n");

    ctx.command()
        .arg("gen")
        .assert()
        .success()
        .stdout("\"#!/bin/sh\\necho 42\"\n");

    ctx.command().args(["-x", "gen"]).assert().success().stdout("42\n");
}

#[test]
fn test_executable_skip_and_failure() {
    let ctx = TestContext::new()
        .with_script("obj/skip", "#!/bin/sh\nexit 65\n")
        .with_file("obj/kept", "1")
        .with_script("broken", "#!/bin/sh\nexit 2\n");

    ctx.command()
        .args(["-x", "obj"])
        .assert()
        .success()
        .stdout("{\"kept\":1}\n");

    ctx.command()
        .args(["-x", "broken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exited with status 2"));
}

#[test]
fn test_verbose_forwards_prefixed_stderr() {
    let ctx = TestContext::new().with_script("gen", "#!/bin/sh\necho warning >&2\necho 1\n");

    ctx.command()
        .args(["-v", "-x", "gen"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("gen: warning\n"));

    ctx.command()
        .args(["-x", "gen"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn test_relative_exec_runs_in_own_dir() {
    let ctx = TestContext::new()
        .with_file("tools/input.txt", "7")
        .with_script("tools/gen", "#!/bin/sh\ncat input.txt\n");

    ctx.command()
        .args(["-x", "--rx", "tools/gen"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_no_temp_exec_uses_current_dir() {
    let ctx = TestContext::new()
        .with_file("input.txt", "from cwd")
        .with_script("tools/gen", "#!/bin/sh\ncat input.txt\n");

    ctx.command()
        .args(["-x", "--nt", "tools/gen"])
        .assert()
        .success()
        .stdout("\"from cwd\"\n");
}

#[test]
fn test_symlinks_need_flag() {
    let ctx = TestContext::new().with_file("target", "5");
    ctx.tree.symlink(ctx.join("target"), "obj/link");

    ctx.command().arg("obj").assert().success().stdout("{}\n");
    ctx.command()
        .args(["-s", "obj"])
        .assert()
        .success()
        .stdout("{\"link\":5}\n");
}

#[test]
fn test_keep_whitespace() {
    let ctx = TestContext::new().with_file("text", "hello \n");

    ctx.command().arg("text").assert().success().stdout("\"hello\"\n");
    ctx.command()
        .args(["--ws", "text"])
        .assert()
        .success()
        .stdout("\"hello \\n\"\n");
}

#[test]
fn test_infinite_value_is_output_error() {
    let ctx = TestContext::new().with_file("x", "-Infinity");

    ctx.command().arg("x").assert().code(3);
}
