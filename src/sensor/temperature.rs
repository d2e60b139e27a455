use sensorium_history::ReadingSequence;

use super::{
    DEFAULT_NAME_CAPACITY, ProcessOutcome, Reading, Sensor, SensorInfo, SensorKind, SensorName,
    describe_history, history_text,
};

/// Name given to a temperature sensor created without one
pub const DEFAULT_TEMPERATURE_NAME: &str = "Temp_Default";

/// A sensor recording floating-point temperatures
///
/// Processing is destructive once there is more than one reading: the lowest
/// reading is dropped permanently and the remainder averaged. A single reading
/// is averaged and left in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSensor {
    name: SensorName,
    history: ReadingSequence<f32>,
}

impl TemperatureSensor {
    /// Create an empty sensor, truncating `name` to the default capacity
    pub fn new(name: &str) -> Self {
        Self::with_name(SensorName::new(
            name,
            DEFAULT_NAME_CAPACITY,
            DEFAULT_TEMPERATURE_NAME,
        ))
    }

    /// Create an empty sensor with an already bounded name
    pub fn with_name(name: SensorName) -> Self {
        tracing::debug!(sensor = %name, "temperature sensor created");
        Self {
            name,
            history: ReadingSequence::new(),
        }
    }

    /// Append a temperature reading
    ///
    /// The value is stored as given. Use [`AnySensor::record`] or the registry
    /// to have NaN and infinite values rejected.
    ///
    /// [`AnySensor::record`]: super::AnySensor::record
    pub fn record_reading(&mut self, temperature: f32) {
        self.history.append(temperature);
        tracing::debug!(sensor = %self.name, temperature, "temperature reading recorded");
    }

    /// Rename the sensor, truncating `name` to the default capacity
    pub fn rename(&mut self, name: &str) {
        self.set_name(SensorName::new(name, DEFAULT_NAME_CAPACITY, DEFAULT_TEMPERATURE_NAME));
    }

    /// Readings in recording order
    pub fn history(&self) -> &ReadingSequence<f32> {
        &self.history
    }
}

impl Default for TemperatureSensor {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_NAME)
    }
}

impl Sensor for TemperatureSensor {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn set_name(&mut self, name: SensorName) {
        tracing::debug!(sensor = %self.name, new_name = %name, "temperature sensor renamed");
        self.name = name;
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn process(&mut self) -> ProcessOutcome {
        match self.history.len() {
            0 => ProcessOutcome::Empty,
            1 => ProcessOutcome::Averaged {
                average: Reading::Float(self.history.average()),
                count: 1,
            },
            _ => {
                let minimum = self.history.extract_minimum();
                tracing::debug!(sensor = %self.name, minimum, "lowest temperature dropped");

                ProcessOutcome::MinimumDropped {
                    minimum: Reading::Float(minimum),
                    remaining_average: Reading::Float(self.history.average()),
                    remaining: self.history.len(),
                }
            }
        }
    }

    fn describe(&self) -> SensorInfo {
        describe_history(&self.name, SensorKind::Temperature, &self.history)
    }

    fn reading_count(&self) -> usize {
        self.history.len()
    }

    fn history_text(&self) -> String {
        history_text(&self.name, &self.history)
    }
}
