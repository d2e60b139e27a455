//! Test utilities for building registries in a known state
//!
//! This module provides helper functions for creating sensors and
//! registries that can be used across different test modules.

use crate::observer::memory::MemObserver;
use crate::registry::SensorRegistry;
use crate::sensor::{PressureSensor, TemperatureSensor};

/// Create a temperature sensor holding `readings` in order
pub fn temperature_sensor(name: &str, readings: &[f32]) -> TemperatureSensor {
    let mut sensor = TemperatureSensor::new(name);
    for reading in readings {
        sensor.record_reading(*reading);
    }
    sensor
}

/// Create a pressure sensor holding `readings` in order
pub fn pressure_sensor(name: &str, readings: &[i32]) -> PressureSensor {
    let mut sensor = PressureSensor::new(name);
    for reading in readings {
        sensor.record_reading(*reading);
    }
    sensor
}

/// Create an empty registry and a handle on the events it emits
pub fn recording_registry() -> (SensorRegistry<MemObserver>, MemObserver) {
    let observer = MemObserver::new();
    (SensorRegistry::with_observer(observer.clone()), observer)
}
