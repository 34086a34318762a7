//! Tests for configuration loading

use std::fs;

use docreview::config::Config;
use docreview::paths;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.policy.staff_group, "Staff");
    assert!(config.assignment.require_tag);
    assert_eq!(config.store.path, paths::default_store());
}

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let config = Config::parse("[policy]\nstaff_group = \"Reviewers\"\n").unwrap();
    assert_eq!(config.policy.staff_group, "Reviewers");
    assert!(config.assignment.require_tag);
    assert_eq!(config.visibility_policy().staff_group(), "Reviewers");
}

#[test]
fn test_parse_rejects_bad_types() {
    assert!(Config::parse("[assignment]\nrequire_tag = \"yes\"\n").is_err());
}

#[test]
fn test_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let mut config = Config::default();
    config.assignment.require_tag = false;
    config.store.path = "data/store.toml".into();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
#[serial]
fn test_load_reads_project_config() {
    let temp = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();

    fs::write(paths::PROJECT_CONFIG, "[assignment]\nrequire_tag = false\n").unwrap();
    let loaded = Config::load();

    std::env::set_current_dir(previous).unwrap();
    assert!(!loaded.unwrap().assignment.require_tag);
}
