//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn crudkit(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("crudkit");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CRUDKIT_CONFIG");
    cmd
}

#[test]
fn test_error_invalid_resource_name() {
    let temp = TempDir::new().unwrap();
    for bad in ["a/b", "../widget", "has space"] {
        crudkit(temp.path())
            .args(["generate", bad])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid resource name"));
    }

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_error_existing_files_without_force() {
    let temp = TempDir::new().unwrap();
    let api = temp.path().join("src/api/widget.js");
    fs::create_dir_all(api.parent().unwrap()).unwrap();
    fs::write(&api, "// hand written\n").unwrap();

    crudkit(temp.path())
        .args(["generate", "widget"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(&api).unwrap(), "// hand written\n");
    assert!(!temp.path().join("src/views").exists());
}

#[test]
fn test_error_missing_templates_dir() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["generate", "widget", "--templates-dir", "nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("templates directory not found"));
}

#[test]
fn test_error_missing_config_file() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["--config", "missing.toml", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("scaffold.output_dir"));
}

#[test]
fn test_error_bad_extension_is_usage_error() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["generate", "widget", "--ext", "py"])
        .assert()
        .failure()
        .code(2);
}
