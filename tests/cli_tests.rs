// Integration tests for the fizzbuzz binary
//
// These run the compiled binary with piped stdin and check stdout, stderr
// and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fizzbuzz"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Should spawn fizzbuzz binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Should write stdin");

    child.wait_with_output().expect("Should collect output")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_default_run_prints_lines() {
    let output = run_cli(&[], "15\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n"
    );
}

#[test]
fn test_list_format_option() {
    let output = run_cli(&["--format", "list"], "15");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "1, 2, Fizz, 4, Buzz, Fizz, 7, 8, Fizz, Buzz, 11, Fizz, 13, 14, FizzBuzz."
    );
}

#[test]
fn test_fibonacci_step_option() {
    let output = run_cli(&["--step", "fibonacci", "--format", "list"], "15");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "1, 2, Fizz, Buzz, 8, 13.");
}

#[test]
fn test_invalid_input_exits_with_input_code() {
    let output = run_cli(&[], "fifteen");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid integer"), "stderr was: {stderr}");
}

#[test]
fn test_bound_below_first_fails() {
    let output = run_cli(&[], "0");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Range error"), "stderr was: {stderr}");
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");
}

#[test]
fn test_invalid_input_reports_one_line() {
    let output = run_cli(&[], "abc");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");
}

#[test]
fn test_unit_step_stops_at_max_bound() {
    let output = run_cli(&["--first", "9223372036854775806"], "9223372036854775807");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "9223372036854775806\n9223372036854775807\n"
    );
}

#[test]
fn test_fibonacci_step_stops_at_max_bound() {
    let output = run_cli(&["--step", "fibonacci"], "9223372036854775807");
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 91);
    assert!(stdout.ends_with("7540113804746346429\n"));
}

#[test]
fn test_config_file_rules() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rules.json");
    std::fs::write(
        &path,
        r#"{ "rules": [ { "divisors": [7], "label": "Bazz" } ], "first": 5, "format": "list" }"#,
    )
    .unwrap();

    let output = run_cli(&["--config", path.to_str().unwrap()], "8");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "5, 6, Bazz, 8.");
}

#[test]
fn test_init_config_then_validate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("default.json");
    let path_str = path.to_str().unwrap();

    let output = run_cli(&["init-config", path_str], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(path.exists());

    // Refuses to overwrite without --force
    let output = run_cli(&["init-config", path_str], "");
    assert_eq!(output.status.code(), Some(1));

    let output = run_cli(&["validate", path_str], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("3 rule(s)"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "rules": [ { "divisors": [], "label": "All" } ] }"#).unwrap();

    let output = run_cli(&["validate", path.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no divisors"), "stderr was: {stderr}");
}
