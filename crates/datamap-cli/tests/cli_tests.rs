// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

const APP_TOML: &str = r#"
[server]
host = "0.0.0.0"
port = 8080
timeout = "1m30s"
tls = "1"
"#;

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("app.toml");
    std::fs::write(&path, APP_TOML).unwrap();
    path
}

fn dmq() -> Command {
    Command::cargo_bin("dmq").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_typed_queries_on_toml_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let out = stdout_of(dmq().arg("-f").arg(&config).args(["int", "server", "port"]));
    assert_eq!(out, "8080\n");

    let out = stdout_of(dmq().arg("-f").arg(&config).args(["bool", "server/tls"]));
    assert_eq!(out, "true\n");

    let out = stdout_of(dmq().arg("-f").arg(&config).args(["duration", "server", "timeout"]));
    assert_eq!(out, "1m30s\n");

    let out = stdout_of(dmq().arg("-f").arg(&config).args(["keys", "server"]));
    assert_eq!(out, "host\nport\ntimeout\ntls\n");
}

#[test]
fn test_default_applies_only_to_missing_paths() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let out = stdout_of(dmq().arg("-f").arg(&config).args([
        "string",
        "server",
        "name",
        "--default",
        "api",
    ]));
    assert_eq!(out, "api\n");

    let output = dmq()
        .arg("-f")
        .arg(&config)
        .args(["string", "server", "port", "--default", "api"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(
        stderr.contains("does not refer to a string: server/port"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_missing_path_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = dmq()
        .arg("-f")
        .arg(&config)
        .args(["get", "client", "port"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(
        stderr.contains("this data path does not exist: client"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_reads_yaml_from_stdin() {
    let out = stdout_of(
        dmq()
            .args(["-f", "-", "--format", "yaml", "get", "db", "replicas"])
            .write_stdin("db:\n  replicas: 3\n"),
    );
    assert_eq!(out, "3\n");
}

#[test]
fn test_unknown_extension_requires_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");
    std::fs::write(&path, "{}").unwrap();

    dmq().arg("-f").arg(&path).args(["keys"]).assert().failure();
    let out = stdout_of(dmq().arg("-f").arg(&path).args(["--format", "json", "keys"]));
    assert_eq!(out, "\n");
}
