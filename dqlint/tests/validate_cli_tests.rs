use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"[
    {
        "check_id": "dq_orders_not_empty",
        "category": "completeness",
        "sql_query": "SELECT count(*) FROM orders",
        "description": "Orders table must not be empty",
        "severity": "High",
        "expected_output": ">=1",
        "comparison_type": "numeric_condition",
        "active": true
    },
    {
        "check_id": "dq_order_status_domain",
        "category": "consistency",
        "sql_query": "SELECT DISTINCT status FROM orders",
        "description": "Order statuses must stay in the known set",
        "severity": "Medium",
        "expected_output": ["pending", "shipped", "delivered"],
        "comparison_type": "set_match",
        "active": true,
        "tags": ["orders"]
    }
]"#;

fn write_config(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

fn dqlint() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dqlint"))
}

#[test]
fn test_valid_config_passes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "checks.json", VALID_CONFIG)?;

    dqlint()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("DQ CONFIGURATION VALIDATOR"))
        .stdout(predicates::str::contains("Valid checks: 2"))
        .stdout(predicates::str::contains("VALIDATION PASSED"));
    Ok(())
}

#[test]
fn test_yaml_config_is_accepted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(
        &dir,
        "checks.yaml",
        r#"
- check_id: dq_orders_not_empty
  category: completeness
  sql_query: SELECT count(*) FROM orders
  description: Orders table must not be empty
  severity: High
  expected_output: ">=1"
  comparison_type: numeric_condition
  active: true
"#,
    )?;

    dqlint()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("VALIDATION PASSED"));
    Ok(())
}

#[test]
fn test_invalid_severity_fails_with_context() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = VALID_CONFIG.replace(r#""severity": "High""#, r#""severity": "high""#);
    let path = write_config(&dir, "checks.json", &config)?;

    dqlint()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("Invalid severity 'high'"))
        .stdout(predicates::str::contains("High, Medium, Low"))
        .stdout(predicates::str::contains("VALIDATION FAILED"));
    Ok(())
}

#[test]
fn test_warnings_only_still_passes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = VALID_CONFIG.replace(
        r#""tags": ["orders"]"#,
        r#""tags": "orders", "refresh_cadence": "daily""#,
    );
    let path = write_config(&dir, "checks.json", &config)?;

    dqlint()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("warning(s)"))
        .stdout(predicates::str::contains("Unknown fields (will be ignored): refresh_cadence"))
        .stdout(predicates::str::contains("VALIDATION PASSED"));
    Ok(())
}

#[test]
fn test_root_object_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "checks.json", r#"{"check_id": "alone"}"#)?;

    dqlint()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("array at the root level"));
    Ok(())
}

#[test]
fn test_empty_list_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "checks.json", "[]")?;

    dqlint()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("cannot be empty"));
    Ok(())
}

#[test]
fn test_missing_file_is_rejected() {
    dqlint()
        .arg("definitely/not/here/checks.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("File not found"));
}

#[test]
fn test_remote_path_is_rejected_without_network() {
    dqlint()
        .arg("gs://dq-bucket/prod/checks.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("not supported"))
        .stderr(predicates::str::contains("Download the file locally"));
}

#[test]
fn test_malformed_json_is_a_load_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "checks.json", "[{")?;

    dqlint()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("JSON Parsing Error"));
    Ok(())
}

#[test]
fn test_verbose_flag_does_not_change_the_verdict() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "checks.json", VALID_CONFIG)?;

    dqlint()
        .arg("--verbose")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("VALIDATION PASSED"));
    Ok(())
}
