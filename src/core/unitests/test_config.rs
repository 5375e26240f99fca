use std::fs;
use log::LevelFilter;

use crate::configuration as cfg;

fn write_conf(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_load_full_config() {
    let path = write_conf("yellowpage-full.conf", r#"{
        "apiUrl": "https://example.hasura.app/v1/graphql",
        "dataDir": "/tmp/yellowpage",
        "logger": {
            "level": "debug",
            "logFile": "/tmp/yellowpage.log"
        }
    }"#);

    let cfg = cfg::Builder::new()
        .load(&path)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.api_url(), "https://example.hasura.app/v1/graphql");
    assert_eq!(cfg.data_dir(), "/tmp/yellowpage");
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("/tmp/yellowpage.log"));
}

#[test]
fn test_logger_defaults_to_info() {
    let path = write_conf("yellowpage-nolog.conf", r#"{
        "apiUrl": "https://example.hasura.app/v1/graphql",
        "dataDir": "/tmp/yellowpage"
    }"#);

    let cfg = cfg::Builder::new()
        .load(&path)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);
}

#[test]
fn test_builder_overrides_win() {
    let path = write_conf("yellowpage-override.conf", r#"{
        "apiUrl": "https://example.hasura.app/v1/graphql",
        "dataDir": "/tmp/yellowpage"
    }"#);

    let cfg = cfg::Builder::new()
        .load(&path)
        .unwrap()
        .with_api_url("http://localhost:8080/v1/graphql")
        .with_data_dir("/tmp/elsewhere")
        .with_logger(LevelFilter::Warn, None)
        .build()
        .unwrap();

    assert_eq!(cfg.api_url(), "http://localhost:8080/v1/graphql");
    assert_eq!(cfg.data_dir(), "/tmp/elsewhere");
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
}

#[test]
fn test_missing_api_url_is_rejected() {
    let result = cfg::Builder::new().build();
    assert_eq!(result.is_err(), true);
}

#[test]
fn test_bad_config_is_rejected() {
    let path = write_conf("yellowpage-bad.conf", "not json at all");
    let mut builder = cfg::Builder::new();
    let result = builder.load(&path);
    assert_eq!(result.is_err(), true);
}
