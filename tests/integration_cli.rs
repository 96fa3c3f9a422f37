// fredlex - A lexer for the FRED Modeling Language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! End-to-end CLI integration tests.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn cargo_bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fredlex"));
    command.env_remove("RUST_LOG");
    command
}

/// Write `files` into a fresh temp dir.
fn fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Test --help flag.
#[test]
fn test_help_flag() {
    let output = cargo_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("fredlex"));
    assert!(stdout.contains("--check"));
    assert!(stdout.contains("--state"));
    assert!(stdout.contains("--skip-whitespace"));
}

/// Test --version flag.
#[test]
fn test_version_flag() {
    let output = cargo_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("fredlex"));
    assert!(stdout.contains(fredlex::VERSION));
}

/// Test the default token dump.
#[test]
fn test_dump_file() {
    let dir = fixture(&[("model.fred", "state S\n")]);

    let output = cargo_bin()
        .arg(dir.path().join("model.fred"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        [
            r#"     0  1:1       keyword         "state""#,
            r#"     5  1:6       whitespace      " ""#,
            r#"     6  1:7       name            "S""#,
            r#"     7  1:8       whitespace      "\n""#,
        ]
    );
}

/// Test --skip-whitespace.
#[test]
fn test_dump_skip_whitespace() {
    let dir = fixture(&[("model.fred", "wait(1)\n  next(I)\n")]);

    let output = cargo_bin()
        .arg("--skip-whitespace")
        .arg(dir.path().join("model.fred"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(!stdout.contains("whitespace"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[4].contains("2:3"), "{}", lines[4]);
    assert!(lines[4].contains("name.builtin"));
    assert!(lines[4].ends_with(r#""next""#));
}

/// Test reading from stdin with `-`.
#[test]
fn test_dump_stdin() {
    let mut child = cargo_bin()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"3.14")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        r#"     0  1:1       number.float    "3.14""#
    );
}

/// Test that several files get headers.
#[test]
fn test_dump_multiple_files() {
    let dir = fixture(&[("a.fred", "1"), ("b.fred", "2")]);

    let output = cargo_bin()
        .arg(dir.path().join("a.fred"))
        .arg(dir.path().join("b.fred"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    let a = stdout.find("a.fred <==").unwrap();
    let b = stdout.find("b.fred <==").unwrap();
    assert!(a < b);
    assert_eq!(stdout.matches("number.integer").count(), 2);
}

/// Test --check on a clean file.
#[test]
fn test_check_clean() {
    let dir = fixture(&[("clean.fred", "condition INF {\n  start_state = S\n}\n")]);

    let output = cargo_bin()
        .arg("--check")
        .arg(dir.path().join("clean.fred"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("clean.fred: ok"));
}

/// Test --check reporting unrecognized input.
#[test]
fn test_check_unrecognized() {
    let dir = fixture(&[("bad.fred", "variables {\n  x : 1\n}\n")]);

    let output = cargo_bin()
        .arg("--check")
        .arg(dir.path().join("bad.fred"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("E001"), "{}", stderr);
    assert!(stderr.contains(r#"Unrecognized input ":""#), "{}", stderr);
    assert!(stderr.contains("Found 1 unrecognized character(s) in 1 file(s)"));
}

/// Test --check explaining a comment without a final newline.
#[test]
fn test_check_comment_at_end_of_file() {
    let dir = fixture(&[("tail.fred", "x = 1\n# last")]);

    let output = cargo_bin()
        .arg("--check")
        .arg(dir.path().join("tail.fred"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains(r##"Unrecognized input "#""##), "{}", stderr);
    assert!(
        stderr.contains("A comment on the last line needs a trailing newline"),
        "{}",
        stderr
    );
}

/// Test that error tokens alone do not fail a dump.
#[test]
fn test_dump_with_error_tokens_succeeds() {
    let dir = fixture(&[("bad.fred", "x : 1")]);

    let output = cargo_bin()
        .arg(dir.path().join("bad.fred"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(stdout(&output).contains(r#"error           ":""#));
}

/// Test --state with a quoted-text state.
#[test]
fn test_state_flag() {
    let dir = fixture(&[("text.txt", r"a\tb")]);

    let output = cargo_bin()
        .args(["--state", "string"])
        .arg(dir.path().join("text.txt"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("string.escape"));
    assert!(stdout.contains(r#""\\t""#));
}

/// Test an unknown --state.
#[test]
fn test_unknown_state_flag() {
    let dir = fixture(&[("model.fred", "x")]);

    let output = cargo_bin()
        .args(["--state", "nowhere"])
        .arg(dir.path().join("model.fred"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown state 'nowhere'"));
}

/// Test that state stack underflow is fatal.
#[test]
fn test_underflow_is_fatal() {
    let dir = fixture(&[("text.txt", "done\" rest")]);

    let output = cargo_bin()
        .args(["--state", "keyword"])
        .arg(dir.path().join("text.txt"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(r#""done""#));
    assert!(stderr(&output).contains("E010"));
}

/// Test a missing input file.
#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = cargo_bin()
        .arg(dir.path().join("missing.fred"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Cannot read"));
}

/// Test --info.
#[test]
fn test_info_flag() {
    let output = cargo_bin()
        .arg("--info")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Name:       FRED"));
    assert!(stdout.contains("*.fred, *.fredmod"));
    assert!(stdout.contains("text/x-fred"));
    assert!(stdout.contains("(initial)"));
    for state in ["root", "code", "keyword", "string"] {
        assert!(stdout.contains(state), "missing state {}", state);
    }
}
