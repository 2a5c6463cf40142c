use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::{NamedTempFile, TempDir};

fn source_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file.flush().unwrap();
    file
}

fn run(input: &Path, log_dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate_mock_data"))
        .arg("--input")
        .arg(input)
        .arg("--log-dir")
        .arg(log_dir)
        .args(extra)
        .output()
        .unwrap()
}

#[test]
fn valid_source_exits_zero_with_json_on_stdout() {
    let rows: Vec<Value> = (0..200)
        .map(|i| json!({"name": format!("c{i}"), "lat": i % 90, "lng": i % 180}))
        .collect();
    let file = source_file(&Value::Array(rows));
    let logs = TempDir::new().unwrap();

    let out = run(file.path(), logs.path(), &["--seed", "11"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let parsed: Value = serde_json::from_slice(&out.stdout).unwrap();
    let flowers = parsed.as_array().unwrap();
    assert_eq!(flowers.len(), 125);
    assert_eq!(flowers.iter().filter(|f| f["texture"] == "flower2").count(), 50);
}

#[test]
fn same_seed_same_stdout() {
    let rows: Vec<Value> = (0..300)
        .map(|i| json!({"name": format!("c{i}"), "lat": 1, "lng": 2}))
        .collect();
    let file = source_file(&Value::Array(rows));
    let logs = TempDir::new().unwrap();

    let a = run(file.path(), logs.path(), &["--seed", "3"]);
    let b = run(file.path(), logs.path(), &["--seed", "3"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn missing_lat_exits_nonzero_with_empty_stdout() {
    let file = source_file(&json!([{"name": "A", "lng": 2}]));
    let logs = TempDir::new().unwrap();

    let out = run(file.path(), logs.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("lat"));
}

#[test]
fn missing_source_exits_nonzero_with_empty_stdout() {
    let logs = TempDir::new().unwrap();

    let out = run(&logs.path().join("absent.json"), logs.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn unusable_log_dir_does_not_fail_the_run() {
    let file = source_file(&json!([{"name": "A", "lat": 1, "lng": 2}]));
    // a regular file where the log directory should go
    let blocker = NamedTempFile::new().unwrap();

    let out = run(file.path(), blocker.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stderr).contains("file logging disabled"));

    let parsed: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        parsed,
        json!([{"lat": 1.0, "lon": 2.0, "texture": "flower1", "name": "A"}])
    );
}
