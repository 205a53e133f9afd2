//! CLI integration tests for table-json-schema.
//!
//! These tests verify command-line argument parsing, help output,
//! generated documents, and exit codes for various error conditions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get a command for the table-json-schema binary.
fn cmd() -> Command {
    Command::cargo_bin("table-json-schema").unwrap()
}

const CONFIG: &str = r#"
dialect: MySQL
options:
  decimals_to_pattern: true
tables:
  users:
    - name: id
      data_type: int
      is_auto_increment: true
    - name: nick
      data_type: varchar
      is_nullable: true
      size: 32
  orders:
    - name: total
      data_type: decimal
      size: [6, 2]
    - name: status
      data_type: enum
      extra: { list: [open, closed] }
"#;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("convert-all"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_convert_subcommand_help() {
    cmd()
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("<TABLE>"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("table-json-schema"));
}

// =============================================================================
// Global Flags Tests
// =============================================================================

#[test]
fn test_config_default() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("[default: schema.yaml]"));
}

#[test]
fn test_log_format_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-format"))
        .stdout(predicate::str::contains("[default: text]"));
}

#[test]
fn test_verbosity_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbosity"))
        .stdout(predicate::str::contains("[default: warn]"));
}

#[test]
fn test_compact_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--compact"));
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_missing_subcommand_fails() {
    cmd().assert().failure();
}

#[test]
fn test_convert_prints_document() {
    let file = config_file(CONFIG);
    let output = cmd()
        .args(["--config", file.path().to_str().unwrap(), "convert", "users"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["type"], "object");
    assert_eq!(doc["required"], serde_json::json!(["id"]));
    assert_eq!(doc["properties"]["id"]["type"], "integer");
    assert_eq!(
        doc["properties"]["nick"]["type"],
        serde_json::json!(["string", "null"])
    );
    assert_eq!(doc["properties"]["nick"]["maxLength"], 32);
    assert_eq!(doc["additionalProperties"], false);
}

#[test]
fn test_convert_applies_config_options() {
    let file = config_file(CONFIG);
    cmd()
        .args([
            "--config",
            file.path().to_str().unwrap(),
            "--compact",
            "convert",
            "orders",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""pattern":"^\\d{1,4}\\.\\d{0,2}$""#))
        .stdout(predicate::str::contains(r#""enum":["open","closed"]"#));
}

#[test]
fn test_convert_to_output_file() {
    let file = config_file(CONFIG);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("users.json");

    cmd()
        .args([
            "--config",
            file.path().to_str().unwrap(),
            "convert",
            "users",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(doc["required"], serde_json::json!(["id"]));
}

#[test]
fn test_convert_all_to_directory() {
    let file = config_file(CONFIG);
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args([
            "--config",
            file.path().to_str().unwrap(),
            "convert-all",
            "--output-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 schemas"));

    assert!(dir.path().join("users.schema.json").exists());
    assert!(dir.path().join("orders.schema.json").exists());
}

#[test]
fn test_convert_all_to_stdout() {
    let file = config_file(CONFIG);
    let output = cmd()
        .args(["--config", file.path().to_str().unwrap(), "convert-all"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let all: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(all["users"]["properties"].is_object());
    assert!(all["orders"]["properties"].is_object());
}

#[test]
fn test_list_tables() {
    let file = config_file(CONFIG);
    cmd()
        .args(["--config", file.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout("orders\nusers\n");
}

#[test]
fn test_validate_valid_config() {
    let file = config_file(CONFIG);
    cmd()
        .args(["--config", file.path().to_str().unwrap(), "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid (2 tables"));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_missing_config_file() {
    cmd()
        .args(["--config", "/nonexistent/schema.yaml", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_dialect_config() {
    let file = config_file("dialect: Oracle\ntables: { t: [ { name: a, data_type: int } ] }\n");
    cmd()
        .args(["--config", file.path().to_str().unwrap(), "validate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_table() {
    let file = config_file(CONFIG);
    cmd()
        .args(["--config", file.path().to_str().unwrap(), "convert", "ghosts"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown source: ghosts"));
}

#[test]
fn test_unknown_column_type() {
    let file = config_file("tables: { t: [ { name: mood, data_type: frobnicate } ] }\n");
    cmd()
        .args(["--config", file.path().to_str().unwrap(), "convert", "t"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("frobnicate"))
        .stderr(predicate::str::contains("mood"));
}
