//! Tests for loading registry configuration from disk

use std::io::Write;

use sensorium::{Config, RegistryError, SensorKind, SensorRegistry};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let file = config_file(
        r#"{
            "name_capacity": 5,
            "default_temperature_name": "thermo",
            "unique_names": true
        }"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.name_capacity, 5);
    assert_eq!(config.default_temperature_name, "thermo");
    assert_eq!(config.default_pressure_name, "Pressure_Default");
    assert!(config.unique_names);
}

#[test]
fn test_registry_applies_loaded_config() {
    let file = config_file(r#"{"name_capacity": 5, "unique_names": true}"#);
    let config = Config::from_file(file.path()).unwrap();
    let mut registry = SensorRegistry::with_config(config, ());

    registry
        .create_sensor(SensorKind::Temperature, "greenhouse")
        .unwrap();
    assert_eq!(registry.list_all(), vec![(1, "green".to_string())]);

    // "greenery" truncates to the same name and is rejected
    let err = registry
        .create_sensor(SensorKind::Pressure, "greenery")
        .unwrap_err();
    assert_eq!(err, RegistryError::duplicate_name("green"));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RegistryError::Config { .. }));
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let file = config_file("{ not json");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Config { .. }));
}
