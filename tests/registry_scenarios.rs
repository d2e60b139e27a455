//! Scenario tests for sensor processing through the registry
//!
//! These tests drive the registry the way a shell would and check the
//! per-kind processing policies and lookup rules.

use sensorium::{
    ProcessOutcome, Reading, RegistryError, Sensor, SensorKind, SensorRegistry,
    test_utils::{pressure_sensor, temperature_sensor},
};

#[test]
fn test_pressure_processing_never_mutates() {
    let mut registry = SensorRegistry::new();
    registry.insert(pressure_sensor("P1", &[10, 20, 30])).unwrap();

    let reports = registry.process_all();
    assert_eq!(
        reports[0].outcome,
        ProcessOutcome::Averaged {
            average: Reading::Int(20),
            count: 3
        }
    );
    assert_eq!(registry.find_by_name("P1").unwrap().reading_count(), 3);
}

#[test]
fn test_temperature_processing_drops_minimum() {
    let mut registry = SensorRegistry::new();
    registry
        .insert(temperature_sensor("T1", &[5.0, 1.0, 3.0]))
        .unwrap();

    let reports = registry.process_all();
    assert_eq!(
        reports[0].outcome,
        ProcessOutcome::MinimumDropped {
            minimum: Reading::Float(1.0),
            remaining_average: Reading::Float(4.0),
            remaining: 2
        }
    );
    assert_eq!(registry.find_by_name("T1").unwrap().reading_count(), 2);
    assert_eq!(
        registry.history("T1").unwrap(),
        "History of T1: 5 3"
    );
}

#[test]
fn test_single_temperature_reading_survives_processing() {
    let mut registry = SensorRegistry::new();
    registry.insert(temperature_sensor("T2", &[7.5])).unwrap();

    let reports = registry.process_all();
    assert_eq!(
        reports[0].outcome,
        ProcessOutcome::Averaged {
            average: Reading::Float(7.5),
            count: 1
        }
    );
    assert_eq!(registry.find_by_name("T2").unwrap().reading_count(), 1);
}

#[test]
fn test_empty_pressure_sensor_has_nothing_to_process() {
    let mut registry = SensorRegistry::new();
    registry.create_sensor(SensorKind::Pressure, "P2").unwrap();

    let reports = registry.process_all();
    assert_eq!(reports[0].outcome, ProcessOutcome::Empty);
    assert_eq!(
        reports[0].to_string(),
        "[P2] (Pressure): no readings to process."
    );
    assert_eq!(registry.find_by_name("P2").unwrap().reading_count(), 0);
}

#[test]
fn test_list_and_lookup() {
    let mut registry = SensorRegistry::new();
    registry.create_sensor(SensorKind::Temperature, "A").unwrap();
    registry.create_sensor(SensorKind::Pressure, "B").unwrap();

    assert_eq!(
        registry.list_all(),
        vec![(1, "A".to_string()), (2, "B".to_string())]
    );
    assert_eq!(registry.find_by_name("A").unwrap().name(), "A");
    assert_eq!(
        registry.find_by_name("A").unwrap().kind(),
        SensorKind::Temperature
    );
    assert!(registry.find_by_name("Z").is_none());
}

#[test]
fn test_repeated_passes_over_mixed_registry() {
    let mut registry = SensorRegistry::new();
    registry
        .insert(temperature_sensor("T1", &[18.0, 22.0, 20.0, 16.0]))
        .unwrap();
    registry.insert(pressure_sensor("P1", &[1000, 1002])).unwrap();

    let extracted: Vec<Option<Reading>> = (0..4)
        .map(|_| registry.process_all()[0].outcome.extracted())
        .collect();

    assert_eq!(
        extracted,
        vec![
            Some(Reading::Float(16.0)),
            Some(Reading::Float(18.0)),
            Some(Reading::Float(20.0)),
            None
        ]
    );
    assert_eq!(registry.history("T1").unwrap(), "History of T1: 22");
    assert_eq!(registry.find_by_name("P1").unwrap().reading_count(), 2);
}

#[test]
fn test_describe_reports_kind_count_and_average() {
    let mut registry = SensorRegistry::new();
    registry
        .insert(temperature_sensor("T1", &[20.0, 21.0]))
        .unwrap();

    let description = registry.describe("T1").unwrap();
    assert_eq!(
        description,
        "=== Temperature Sensor ===\n\
         Name: T1\n\
         Kind: Temperature (float)\n\
         Readings: 2\n\
         Average: 20.5\n\
         =========================="
    );
    // Describing is purely observational
    assert_eq!(registry.find_by_name("T1").unwrap().reading_count(), 2);
}

#[test]
fn test_long_names_are_truncated_on_creation() {
    let mut registry = SensorRegistry::new();
    let long_name = "sensor-".repeat(10);
    let handle = registry
        .create_sensor(SensorKind::Temperature, &long_name)
        .unwrap();

    let name = registry.get(handle).unwrap().name().to_string();
    assert_eq!(name.chars().count(), 49);
    assert!(long_name.starts_with(&name));
    assert!(registry.find_by_name(&name).is_some());
}

#[test]
fn test_blank_names_fall_back_to_kind_default() {
    let mut registry = SensorRegistry::new();
    registry.create_sensor(SensorKind::Temperature, "").unwrap();
    registry.create_sensor(SensorKind::Pressure, "  ").unwrap();

    assert_eq!(
        registry.list_all(),
        vec![
            (1, "Temp_Default".to_string()),
            (2, "Pressure_Default".to_string())
        ]
    );
}

#[test]
fn test_non_finite_temperatures_keep_the_true_minimum() {
    let mut registry = SensorRegistry::new();
    registry.create_sensor(SensorKind::Temperature, "T1").unwrap();
    registry.record_reading("T1", 5.0_f32).unwrap();
    registry.record_reading("T1", 1.0_f32).unwrap();

    for value in [f32::NAN, f32::INFINITY] {
        assert!(matches!(
            registry.record_reading("T1", value),
            Err(RegistryError::NonFiniteReading { .. })
        ));
    }

    let reports = registry.process_all();
    assert_eq!(
        reports[0].outcome,
        ProcessOutcome::MinimumDropped {
            minimum: Reading::Float(1.0),
            remaining_average: Reading::Float(5.0),
            remaining: 1,
        }
    );
}

#[test]
fn test_renamed_sensor_is_found_by_new_name() {
    let mut registry = SensorRegistry::new();
    registry.insert(temperature_sensor("T1", &[4.0, 2.0])).unwrap();

    let long_name = "z".repeat(70);
    let handle = registry.rename("T1", &long_name).unwrap();

    let name = registry.get(handle).unwrap().name().to_string();
    assert_eq!(name.len(), 49);
    let sensor = registry.find_by_name(&name).unwrap();
    assert_eq!(sensor.reading_count(), 2);
    assert!(registry.find_by_name("T1").is_none());
}
