//! Config file loading.

use greedy_toe::AppConfig;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert!(*config.automated_opponent());
    assert_eq!(config.think_delay(), Duration::from_millis(600));
    assert_eq!(config.outcome_display(), Duration::from_millis(1500));
    assert!(*config.sound());
    assert_eq!(config.log_file(), &PathBuf::from("greedy_toe.log"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("think_delay_ms = 250\nsound = false\n");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.think_delay_ms(), 250);
    assert!(!*config.sound());
    assert!(*config.automated_opponent());
    assert_eq!(*config.outcome_display_ms(), 1500);
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_config("difficulty = \"hard\"\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(AppConfig::from_file(dir.path().join("absent.toml")).is_err());
}
