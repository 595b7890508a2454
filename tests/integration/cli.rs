//! Integration tests for the envtree binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(file: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_envtree");
    Command::new(bin)
        .env_remove("ENVTREE_LOG")
        .env("ENVTREE_LOGGING__LEVEL", "off")
        .arg("--file")
        .arg(file)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "envtree should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn write_doc(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("env.toml");
    std::fs::write(
        &path,
        r#"
[app]
env = "prod"
workers = 4
hosts = ["a", "b"]
"#,
    )
    .unwrap();
    path
}

#[test]
fn test_get_typed_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_doc(&temp_dir);

    assert_eq!(stdout(&run(&path, &["get", "app.env"])), "prod");
    assert_eq!(stdout(&run(&path, &["get", "app.workers", "--as", "int"])), "4");
    assert_eq!(
        stdout(&run(&path, &["get", "app.hosts", "--as", "strings"])),
        r#"["a","b"]"#
    );
    assert_eq!(
        stdout(&run(&path, &["get", "app.missing", "--as", "int", "--default", "9"])),
        "9"
    );
    assert_eq!(
        stdout(&run(&path, &["get", "app.env", "--as", "int", "--default", "9"])),
        "0"
    );
}

#[test]
fn test_dump_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_doc(&temp_dir);

    let json = stdout(&run(&path, &["dump", "app", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["workers"], 4);
    assert_eq!(parsed["hosts"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_keys_lists_sections() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_doc(&temp_dir);

    let table = stdout(&run(&path, &["keys"]));
    assert!(table.contains("app"));
    assert!(table.contains("tree"));
}

#[test]
fn test_check_reports_parse_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("env.toml");
    std::fs::write(&path, "[app\n").unwrap();

    let output = run(&path, &["check"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse env document"));
}

#[test]
fn test_init_writes_template_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf").join("env.toml");

    assert!(stdout(&run(&path, &["init"])).starts_with("Created"));
    assert!(path.exists());
    assert!(stdout(&run(&path, &["init"])).starts_with("Skipped"));
    assert!(stdout(&run(&path, &["check"])).contains("ok"));
}

#[test]
fn test_no_create_leaves_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("env.toml");

    let output = run(&path, &["--no-create", "get", "app.env"]);
    assert!(!output.status.success());
    assert!(!path.exists());
}
