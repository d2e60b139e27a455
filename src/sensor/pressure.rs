use sensorium_history::ReadingSequence;

use super::{
    DEFAULT_NAME_CAPACITY, ProcessOutcome, Reading, Sensor, SensorInfo, SensorKind, SensorName,
    describe_history, history_text,
};

/// Name given to a pressure sensor created without one
pub const DEFAULT_PRESSURE_NAME: &str = "Pressure_Default";

/// A sensor recording integral pressures
///
/// Processing never changes a pressure sensor; it only reports the truncated
/// average of every reading.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSensor {
    name: SensorName,
    history: ReadingSequence<i32>,
}

impl PressureSensor {
    /// Create an empty sensor, truncating `name` to the default capacity
    pub fn new(name: &str) -> Self {
        Self::with_name(SensorName::new(
            name,
            DEFAULT_NAME_CAPACITY,
            DEFAULT_PRESSURE_NAME,
        ))
    }

    /// Create an empty sensor with an already bounded name
    pub fn with_name(name: SensorName) -> Self {
        tracing::debug!(sensor = %name, "pressure sensor created");
        Self {
            name,
            history: ReadingSequence::new(),
        }
    }

    /// Append a pressure reading
    pub fn record_reading(&mut self, pressure: i32) {
        self.history.append(pressure);
        tracing::debug!(sensor = %self.name, pressure, "pressure reading recorded");
    }

    /// Rename the sensor, truncating `name` to the default capacity
    pub fn rename(&mut self, name: &str) {
        self.set_name(SensorName::new(name, DEFAULT_NAME_CAPACITY, DEFAULT_PRESSURE_NAME));
    }

    /// Readings in recording order
    pub fn history(&self) -> &ReadingSequence<i32> {
        &self.history
    }
}

impl Default for PressureSensor {
    fn default() -> Self {
        Self::new(DEFAULT_PRESSURE_NAME)
    }
}

impl Sensor for PressureSensor {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn set_name(&mut self, name: SensorName) {
        tracing::debug!(sensor = %self.name, new_name = %name, "pressure sensor renamed");
        self.name = name;
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
    }

    fn process(&mut self) -> ProcessOutcome {
        if self.history.is_empty() {
            return ProcessOutcome::Empty;
        }

        ProcessOutcome::Averaged {
            average: Reading::Int(self.history.average()),
            count: self.history.len(),
        }
    }

    fn describe(&self) -> SensorInfo {
        describe_history(&self.name, SensorKind::Pressure, &self.history)
    }

    fn reading_count(&self) -> usize {
        self.history.len()
    }

    fn history_text(&self) -> String {
        history_text(&self.name, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_reports_average_without_mutation() {
        let mut sensor = PressureSensor::new("P1");
        for reading in [10, 20, 30] {
            sensor.record_reading(reading);
        }

        for _ in 0..3 {
            assert_eq!(
                sensor.process(),
                ProcessOutcome::Averaged {
                    average: Reading::Int(20),
                    count: 3,
                }
            );
        }
        assert_eq!(sensor.reading_count(), 3);
    }

    #[test]
    fn test_rename_keeps_readings_and_bounds_name() {
        let mut sensor = PressureSensor::new("P1");
        sensor.record_reading(12);

        sensor.rename(&"y".repeat(60));
        assert_eq!(sensor.name().len(), DEFAULT_NAME_CAPACITY);
        assert_eq!(sensor.reading_count(), 1);

        sensor.rename("  ");
        assert_eq!(sensor.name(), "Pressure_Default");
    }

    #[test]
    fn test_process_empty() {
        let mut sensor = PressureSensor::new("P2");
        assert_eq!(sensor.process(), ProcessOutcome::Empty);
        assert_eq!(sensor.reading_count(), 0);
        assert!(!sensor.has_readings());
    }

    #[test]
    fn test_average_truncates() {
        let mut sensor = PressureSensor::default();
        sensor.record_reading(1013);
        sensor.record_reading(1010);

        assert_eq!(sensor.name(), "Pressure_Default");
        assert_eq!(sensor.describe().average, Some(Reading::Int(1011)));
    }

    #[test]
    fn test_describe_empty_has_no_average() {
        let sensor = PressureSensor::new("P3");
        let info = sensor.describe();

        assert_eq!(info.kind, SensorKind::Pressure);
        assert_eq!(info.reading_type, "int");
        assert_eq!(info.average, None);
        assert_eq!(
            info.to_string(),
            "=== Pressure Sensor ===\nName: P3\nKind: Pressure (int)\nReadings: 0\n======================="
        );
        assert_eq!(sensor.history_text(), "History of P3: (no readings)");
    }
}
