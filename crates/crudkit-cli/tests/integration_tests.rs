//! Integration tests for crudkit-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// `crudkit` running in `dir`, with config lookups confined to it.
fn crudkit(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("crudkit");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CRUDKIT_CONFIG");
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("crudkit"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_widget() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["generate", "widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let api = read(temp.path().join("src/api/widget.js"));
    assert!(api.starts_with("// API descriptor for the 'widget' resource.\n"));
    for op in ["list", "one", "add", "update", "delete"] {
        assert!(api.contains(&format!("{op}: '/api/{op}'")));
    }

    let view = read(temp.path().join("src/views/widget/view.js"));
    assert!(view.contains("import widget from '../../api/widget'"));
    assert!(view.contains("data: new CollectionDescriptor('widget'),"));
    assert!(!view.contains("{{"));
}

#[test]
fn test_generate_hyphenated_typescript_into_output_dir() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["g", "order-item", "--ext", "ts", "-o", "app/src"])
        .assert()
        .success();

    assert!(temp.path().join("app/src/api/order-item.ts").is_file());
    let view = read(temp.path().join("app/src/views/order-item/view.ts"));
    assert!(view.contains("import orderItem from '../../api/order-item'"));
    assert!(view.contains("new CollectionDescriptor('order-item')"));
}

#[test]
fn test_generate_is_idempotent_with_force() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path()).args(["generate", "widget"]).assert().success();
    let first = read(temp.path().join("src/views/widget/view.js"));

    crudkit(temp.path())
        .args(["generate", "widget", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote"));

    assert_eq!(first, read(temp.path().join("src/views/widget/view.js")));
}

#[test]
fn test_generate_dry_run() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["generate", "widget", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("view.js"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_generate_json_report() {
    let temp = TempDir::new().unwrap();
    let out = crudkit(temp.path())
        .args(["--output-format", "json", "generate", "widget"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["resource"], "widget");
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["files"].as_array().unwrap().len(), 2);
    assert_eq!(report["files"][0]["template"], "api");
}

#[test]
fn test_generate_with_custom_templates() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(
        templates.join("view.toml"),
        "[template]\nname = \"view\"\npath = \"views/{{ resource_name }}/index.{{ ext }}\"\nbody_file = \"view.tmpl\"\n",
    )
    .unwrap();
    fs::write(templates.join("view.tmpl"), "// custom view for {{ resource_name }}\n").unwrap();

    crudkit(temp.path())
        .args(["generate", "widget", "--templates-dir", "templates"])
        .assert()
        .success();

    assert!(temp.path().join("src/api/widget.js").is_file());
    assert_eq!(
        read(temp.path().join("src/views/widget/index.js")),
        "// custom view for widget\n"
    );
    assert!(!temp.path().join("src/views/widget/view.js").exists());
}

#[test]
fn test_output_dir_from_environment() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .env("CRUDKIT__SCAFFOLD__OUTPUT_DIR", "web")
        .args(["generate", "widget"])
        .assert()
        .success();

    assert!(temp.path().join("web/api/widget.js").is_file());
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["-q", "generate", "widget"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("src/api/widget.js").is_file());
}

#[test]
fn test_verbose_flag() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["-v", "generate", "widget"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_list_table() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Templates"))
        .stdout(predicate::str::contains("views/{{ resource_name }}/view.{{ ext }}"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let out = crudkit(temp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let templates: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<&str> = templates
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["api", "view"]);
}

#[test]
fn test_init_and_config_roundtrip() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("crudkit.toml");
    let cfg_arg = cfg.to_str().unwrap();

    crudkit(temp.path())
        .args(["--config", cfg_arg, "init"])
        .assert()
        .success();
    assert!(read(&cfg).contains("[scaffold]"));

    crudkit(temp.path())
        .args(["--config", cfg_arg, "config", "set", "scaffold.extension", "ts"])
        .assert()
        .success();

    crudkit(temp.path())
        .args(["--config", cfg_arg, "config", "get", "scaffold.extension"])
        .assert()
        .success()
        .stdout("ts\n");

    crudkit(temp.path())
        .args(["--config", cfg_arg, "generate", "widget"])
        .assert()
        .success();
    assert!(temp.path().join("src/api/widget.ts").is_file());
}

#[test]
fn test_config_set_on_partial_file() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("crudkit.toml");
    fs::write(&cfg, "[scaffold]\nextension = \"ts\"\n").unwrap();
    let cfg_arg = cfg.to_str().unwrap();

    crudkit(temp.path())
        .args(["--config", cfg_arg, "config", "set", "scaffold.output_dir", "web"])
        .assert()
        .success();

    crudkit(temp.path())
        .args(["--config", cfg_arg, "generate", "widget"])
        .assert()
        .success();
    assert!(temp.path().join("web/api/widget.ts").is_file());
}

#[test]
fn test_configured_output_format() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("crudkit.toml");
    let cfg_arg = cfg.to_str().unwrap();

    crudkit(temp.path())
        .args(["--config", cfg_arg, "config", "set", "output.format", "json"])
        .assert()
        .success();

    let out = crudkit(temp.path())
        .args(["--config", cfg_arg, "generate", "widget"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["resource"], "widget");
}

#[test]
fn test_config_path_honours_flag() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    crudkit(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudkit"));
}
