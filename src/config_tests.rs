//! Tests for config loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_path() {
    let file = write_config(
        r#"
[lookup]
endpoint = "http://localhost:8080/search.php"

[ui]
no_options_label = "Nothing poured"
"#,
    );

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.lookup.endpoint, "http://localhost:8080/search.php");
    assert_eq!(config.ui.no_options_label, "Nothing poured");
    assert_eq!(config.search.debounce_ms, 500);
}

#[test]
fn test_missing_explicit_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let result = load_config(Some(&path));
    assert!(matches!(result, Err(BarcartError::Config(_))));
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("[lookup\nendpoint = ");
    let result = load_config(Some(file.path()));
    assert!(matches!(result, Err(BarcartError::Config(_))));
}

#[test]
fn test_default_endpoint_parses() {
    let url = LookupConfig::default().endpoint_url().unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("www.thecocktaildb.com"));
}

#[test]
fn test_endpoint_rejects_garbage() {
    let lookup = LookupConfig {
        endpoint: "not a url".to_string(),
        ..LookupConfig::default()
    };
    assert!(matches!(
        lookup.endpoint_url(),
        Err(BarcartError::InvalidEndpoint { .. })
    ));
}

#[test]
fn test_endpoint_rejects_non_http_scheme() {
    let lookup = LookupConfig {
        endpoint: "ftp://example.com/search".to_string(),
        ..LookupConfig::default()
    };
    let err = lookup.endpoint_url().unwrap_err();
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn test_zero_timeout_disables_it() {
    let lookup = LookupConfig {
        timeout_ms: 0,
        ..LookupConfig::default()
    };
    assert_eq!(lookup.timeout(), None);
    assert_eq!(
        LookupConfig::default().timeout(),
        Some(Duration::from_millis(10_000))
    );
}

#[test]
fn test_quiet_period() {
    let search = SearchConfig { debounce_ms: 250 };
    assert_eq!(search.quiet_period(), Duration::from_millis(250));
}
