// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the `microjava` command-line drivers.
//!
//! Each test writes a source file into a temporary directory, runs the
//! built binary against it, and asserts on the captured output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn microjava(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_microjava"))
        .args(args)
        .output()
        .expect("failed to run microjava binary")
}

fn write_source(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write source file");
    path
}

#[test]
fn tokens_dumps_token_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "p.mj", "program P { }");

    let output = microjava(&["tokens", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Token { kind = Program;"));
    assert!(lines[1].contains("kind = Identifier;"));
    assert!(lines[1].contains("value = P"));
    assert!(lines[2].contains("kind = LeftBrace;"));
    assert!(lines[3].contains("kind = RightBrace;"));
    assert!(lines[4].contains("kind = EndOfInput;"));
}

#[test]
fn tokens_reports_lexical_errors_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "p.mj", "x = @;");

    let output = microjava(&["tokens", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("lexical error:"));
    assert!(stderr.contains("unexpected character '@'"));
}

#[test]
fn check_accepts_clean_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
        &dir,
        "p.mj",
        "program P final int x = 1; { void m() { return; } }",
    );

    let output = microjava(&["check", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "0 errors detected");
    assert!(output.stderr.is_empty());
}

#[test]
fn check_reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "p.mj", "program P { void m() { @ x = 1; } }");

    let output = microjava(&["check", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "1 errors detected");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("syntax error:"));
    assert!(stderr.contains("invalid start of statement"));
}

#[test]
fn check_keeps_lexical_and_syntax_diagnostics_separate() {
    let dir = tempfile::tempdir().unwrap();
    // The empty character literal is a lexical error, but the program is
    // still syntactically well formed
    let path = write_source(&dir, "p.mj", "program P { void m() { x = ''; } }");

    let output = microjava(&["check", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "0 errors detected");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("lexical error:"));
    assert!(stderr.contains("empty character literal"));
}

#[test]
fn missing_input_file_is_fatal() {
    let output = microjava(&["check", "no/such/file.mj"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot open input file"));
}
