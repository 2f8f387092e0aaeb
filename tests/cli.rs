//! E2E tests for the compare, sweep and schema commands

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bizform(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bizform"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the side-by-side report for a gross profit given on the command line
#[test]
fn compare_from_argument() {
    let output = bizform(&["compare", "100000000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("SOLE PROPRIETORSHIP"));
    assert!(stdout.contains("(20,100,000)"));
    assert!(stdout.contains("(2,010,000)"));
    assert!(stdout.contains("77,890,000"));

    assert!(stdout.contains("CORPORATION"));
    assert!(stdout.contains("44,500,000"));
    assert!(stdout.contains("79,747,020"));

    assert!(stdout.contains("Corporation (favourable) > Sole proprietorship: 1,857,020 KRW"));
}

/// Test reading the gross profit from the prompt
#[test]
fn compare_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bizform"))
        .arg("compare")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"1,000,000,000\n")
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Gross profit (KRW): "));
    assert!(stdout.contains("Corporation < Sole proprietorship (favourable): 22,232,320 KRW"));
}

/// Test that end of input at the prompt is an error
#[test]
fn compare_without_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_bizform"))
        .arg("compare")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("No input received"));
}

/// Test that an amount beyond the supported range is named as such
#[test]
fn compare_rejects_amount_too_large() {
    let output = bizform(&["compare", "10000000000000000000"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("amount exceeds"));
    assert!(!stderr.contains("not a whole number"));
}

/// Test that a non-numeric amount is rejected before any calculation
#[test]
fn compare_rejects_non_numeric() {
    let output = bizform(&["compare", "a lot"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("not a whole number"));
    assert!(output.stdout.is_empty());
}

/// Test the JSON output of a tie
#[test]
fn compare_json() {
    let output = bizform(&["compare", "50000000", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(json["difference"], "0");
    assert_eq!(json["favourable"], "corporation");
    assert_eq!(json["corporation"]["dividend_income"], "0");
    assert_eq!(json["corporation"]["income_after_tax"], "42542000");
    assert_eq!(json["sole_proprietorship"]["income_after_tax"], "42542000");
}

/// Test that the salary assumption can be changed
#[test]
fn compare_with_salary() {
    let output = bizform(&["compare", "30000000", "--salary", "30000000", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(json["corporation"]["annual_salary"], "30000000");
    assert_eq!(json["corporation"]["income_after_tax"], "26238000");
}

/// Test sweep CSV output
#[test]
fn sweep_csv() {
    let output = bizform(&[
        "sweep",
        "--from",
        "50000000",
        "--to",
        "100000000",
        "--step",
        "50000000",
        "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "gross_profit,sole_proprietorship,corporation,difference,favourable"
    );
    assert_eq!(lines[2], "100000000,77890000,79747020,1857020,corporation");
}

/// Test that a zero step is rejected
#[test]
fn sweep_rejects_zero_step() {
    let output = bizform(&["sweep", "--from", "0", "--to", "10", "--step", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("step must be positive"));
}

/// Test that a sweep over too many gross profits is rejected
#[test]
fn sweep_rejects_oversized_range() {
    let output = bizform(&[
        "sweep",
        "--from",
        "0",
        "--to",
        "9223372036854775807",
        "--step",
        "1",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("use a larger step"));
    assert!(output.stdout.is_empty());
}

/// Test the JSON schema output
#[test]
fn schema_json() {
    let output = bizform(&["schema"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let schema: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON schema");
    assert_eq!(schema["title"], "Comparison");
}
