//! End-to-end tests for the daytrader-fixtures binary.

use std::io::Write;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daytrader-fixtures"))
        .args(args)
        .env_remove("DAYTRADER_FIXTURES_SEED")
        .env_remove("DAYTRADER_FIXTURES_CONFIG")
        .output()
        .expect("failed to run daytrader-fixtures")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn profiles_are_reproducible_with_seed() {
    let first = run(&["profiles", "--seed", "42", "--count", "3", "--format", "json"]);
    let second = run(&["profiles", "--seed", "42", "--count", "3", "--format", "json"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let lines = stdout_lines(&first);
    assert_eq!(lines.len(), 3);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value["userID"].as_str().unwrap().starts_with("uid:"));
        assert!(value["email"].as_str().unwrap().starts_with("random@"));
    }
}

#[test]
fn accounts_with_profiles_as_json() {
    let output = run(&[
        "accounts",
        "--seed",
        "7",
        "--count",
        "2",
        "--format",
        "json",
        "--with-profile",
    ]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["profileID"], value["profile"]["userID"]);
    }
}

#[test]
fn accounts_as_html_in_zone() {
    let output = run(&[
        "accounts",
        "--seed",
        "1",
        "--count",
        "1",
        "--format",
        "html",
        "--zone",
        "Europe/London",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<BR>Account Data for account: <B>"));
    assert!(stdout.contains("<LI>    profileID:uid:"));
}

#[test]
fn users_respect_max_users() {
    let output = run(&["users", "--seed", "3", "--count", "20", "--max-users", "1"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|l| l == "uid:0"));
}

#[test]
fn new_users_use_configured_host() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "host: \"desk\"").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["users", "--new", "--count", "3", "--config", path]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.starts_with("ru:desk")));
    assert!(lines[0].ends_with('0'));
    assert!(lines[1].ends_with('1'));
    assert!(lines[2].ends_with('2'));
}

#[test]
fn quotes_rows_have_five_columns() {
    let output = run(&["quotes", "--seed", "9", "--count", "4", "--order-type", "cash"]);
    assert!(output.status.success());

    for line in stdout_lines(&output) {
        let columns: Vec<&str> = line.split(',').collect();
        assert_eq!(columns.len(), 5);
        assert!(columns[0].starts_with("s:"));
        assert_eq!(columns[4], "0.0");
    }
}

#[test]
fn invalid_config_fails_with_context() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_users: 0").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["symbols", "--config", path]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to load generator settings"));
    assert!(stderr.contains("max_users"));
}
