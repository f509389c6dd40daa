use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn barcart() -> Command {
    Command::cargo_bin("barcart").unwrap()
}

#[test]
fn test_help_lists_options() {
    barcart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--debounce-ms"))
        .stdout(predicate::str::contains("--no-loading"));
}

#[test]
fn test_version() {
    barcart()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_rejects_non_http_endpoint() {
    barcart()
        .args(["--endpoint", "ftp://example.com/search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid lookup endpoint"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    barcart()
        .args(["--config", "/nonexistent/barcart/config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_invalid_endpoint_in_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[lookup]\nendpoint = \"not a url\"").unwrap();

    barcart()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a url"));
}

#[test]
fn test_rejects_non_numeric_debounce() {
    barcart()
        .args(["--debounce-ms", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
