/// CLI Verification Tests
/// Runs the built binary and checks exit codes, output file and usage hint.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn run_cli(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_method-tree"))
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Dropping the handle closes the pipe, signalling end of input. The
    // process may already have exited on a usage error, so a broken pipe is fine.
    let mut pipe = child.stdin.take().unwrap();
    let _ = pipe.write_all(stdin);
    drop(pipe);

    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_identifier_exits_non_zero() {
    let output = run_cli(&[], b"Library.a();\n");
    assert!(!output.status.success());
}

#[test]
fn test_empty_input_prints_usage_hint() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tree.json");
    let output = run_cli(&["Library", "-o", out.to_str().unwrap()], b"");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no piped input"), "{}", stderr);
    assert!(stderr.contains("ag 'React.' -Q | method-tree React"), "{}", stderr);
    assert!(!out.exists());
}

#[test]
fn test_invalid_identifier_prints_usage_hint() {
    let output = run_cli(&["my_lib"], b"my_lib.a();\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid identifier 'my_lib'"), "{}", stderr);
    assert!(stderr.contains("method-tree React"), "{}", stderr);
}

#[test]
fn test_no_matches_exits_non_zero_without_hint() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tree.json");
    let output = run_cli(&["Library", "-o", out.to_str().unwrap()], b"React.render();\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no matches found"), "{}", stderr);
    assert!(!stderr.contains("method-tree React"), "{}", stderr);
}

#[test]
fn test_successful_run_writes_tree_and_exits_zero() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tree.json");
    let output = run_cli(
        &["Library", "-o", out.to_str().unwrap(), "--timeout-ms", "5000"],
        b"foo.Library.x().y();\nbar.Library.x().z();\n",
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 3 unique methods"), "{}", stdout);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({ "Library.": { "x": { "y": {}, "z": {} } } })
    );
}
