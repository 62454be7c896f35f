//! Integration tests for ConfigStore and configuration file handling
//!
//! These tests verify:
//! - Default configuration values
//! - Flat-file parsing (comments, blank lines, embedded separators, trimming)
//! - Failure behavior: a failed load leaves existing entries intact
//! - Sharing a store between processors

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use textkit::{ConfigStore, DataProcessor, ProcessingMode};

fn write_config(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    Utf8PathBuf::try_from(path).unwrap()
}

#[test]
fn test_defaults_present_before_any_load() {
    let store = ConfigStore::new();

    assert!(store.contains_key("app.name"));
    assert!(store.contains_key("app.version"));
    assert_eq!(store.get("processing.batch_size"), Some("10"));
    assert_eq!(store.get("logging.level"), Some("info"));
}

#[test]
fn test_load_parses_key_value_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "settings.conf",
        "# application settings\n\
         app.name=foo\n\
         \n\
         \tprocessing.batch_size\t=  3\n\
         connection.string = host=localhost;port=5432\n",
    );

    let mut store = ConfigStore::new();
    store.load_from_file(&path).unwrap();

    assert_eq!(store.get("app.name"), Some("foo"));
    assert_eq!(store.get("processing.batch_size"), Some("3"));
    // Only the first '=' separates key from value
    assert_eq!(
        store.get("connection.string"),
        Some("host=localhost;port=5432")
    );
    assert!(store.is_loaded());
}

#[test]
fn test_load_skips_comments_and_malformed_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "sparse.conf",
        "# only one real entry below\njust some text without separator\nkey=value\n",
    );

    let mut store = ConfigStore::new();
    store.load_from_file(&path).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("key"), Some("value"));
}

#[test]
fn test_load_replaces_previous_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "minimal.conf", "only.key=only-value\n");

    let mut store = ConfigStore::new();
    store.set("stale.key", "stale");
    store.load_from_file(&path).unwrap();

    assert_eq!(store.len(), 1);
    assert!(!store.contains_key("stale.key"));
    assert!(!store.contains_key("processing.batch_size"));
}

#[test]
fn test_failed_load_leaves_entries_intact() {
    let dir = TempDir::new().unwrap();
    let missing = Utf8PathBuf::try_from(dir.path().join("missing.conf")).unwrap();

    let mut store = ConfigStore::new();
    store.set("important.key", "still-here");
    let entry_count = store.len();

    let result = store.load_from_file(&missing);

    assert!(result.is_err());
    assert_eq!(store.len(), entry_count);
    assert_eq!(store.get("important.key"), Some("still-here"));
    assert!(!store.is_loaded());
}

#[test]
fn test_loaded_values_drive_batch_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "limit.conf", "processing.batch_size=2\n");

    let config = ConfigStore::new_shared();
    config.borrow_mut().load_from_file(&path).unwrap();

    let processor = DataProcessor::new(config);
    let inputs = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let result = processor.process_batch(&inputs, ProcessingMode::Batch);

    assert!(!result.success);
    assert!(result.error_message.contains("limit of 2"));
}

#[test]
fn test_shared_store_visible_to_all_processors() {
    let config = ConfigStore::new_shared();
    let writer = DataProcessor::new(config.clone());
    let reader = DataProcessor::new(config.clone());

    writer.set_processing_config("batch_size", "1");

    let inputs = vec!["a".to_string(), "b".to_string()];
    let result = reader.process_batch(&inputs, ProcessingMode::Simple);

    assert!(!result.success);
    assert!(result.error_message.contains("limit of 1"));
}
