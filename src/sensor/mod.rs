//! Sensors and the capability contract they share
//!
//! There are exactly two kinds of sensor. [`TemperatureSensor`] keeps `f32`
//! readings and drops its lowest reading every time it is processed;
//! [`PressureSensor`] keeps `i32` readings and only ever reports their average.
//! Both implement [`Sensor`], and [`AnySensor`] closes the set so callers can
//! check which kind they hold with a single `match`.

use std::fmt;

use serde::{Deserialize, Serialize};
use sensorium_history::Numeric;

use crate::error::{RegistryError, Result};

pub mod name;
pub mod pressure;
pub mod temperature;

pub use name::{DEFAULT_NAME_CAPACITY, SensorName};
pub use pressure::{DEFAULT_PRESSURE_NAME, PressureSensor};
pub use temperature::{DEFAULT_TEMPERATURE_NAME, TemperatureSensor};

/// The kind of a sensor, which fixes its reading type for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Floating-point readings
    Temperature,
    /// Integral readings
    Pressure,
}

impl SensorKind {
    /// Name of the numeric type this kind records
    pub fn reading_type(self) -> &'static str {
        match self {
            SensorKind::Temperature => f32::TYPE_NAME,
            SensorKind::Pressure => i32::TYPE_NAME,
        }
    }

    /// Capitalized name for headings
    pub fn label(self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Pressure => "Pressure",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorKind::Temperature => f.write_str("temperature"),
            SensorKind::Pressure => f.write_str("pressure"),
        }
    }
}

/// A single reading of either numeric type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    /// Integral reading, accepted by pressure sensors
    Int(i32),
    /// Floating-point reading, accepted by temperature sensors
    Float(f32),
}

impl Reading {
    /// The sensor kind that accepts this reading
    pub fn kind(&self) -> SensorKind {
        match self {
            Reading::Int(_) => SensorKind::Pressure,
            Reading::Float(_) => SensorKind::Temperature,
        }
    }
}

impl From<i32> for Reading {
    fn from(value: i32) -> Self {
        Reading::Int(value)
    }
}

impl From<f32> for Reading {
    fn from(value: f32) -> Self {
        Reading::Float(value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Int(value) => write!(f, "{}", value),
            Reading::Float(value) => write!(f, "{}", value),
        }
    }
}

/// What a processing pass did to a sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// No readings, nothing changed
    Empty,
    /// Average over all current readings, nothing removed
    Averaged { average: Reading, count: usize },
    /// The lowest reading was removed and the rest averaged
    MinimumDropped {
        minimum: Reading,
        remaining_average: Reading,
        remaining: usize,
    },
}

impl ProcessOutcome {
    /// The reading that was permanently removed, if any
    pub fn extracted(&self) -> Option<Reading> {
        match self {
            ProcessOutcome::MinimumDropped { minimum, .. } => Some(*minimum),
            _ => None,
        }
    }
}

/// Result of processing one sensor, tagged with the sensor it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReport {
    pub name: String,
    pub kind: SensorKind,
    #[serde(flatten)]
    pub outcome: ProcessOutcome,
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind.label();
        match &self.outcome {
            ProcessOutcome::Empty => {
                write!(f, "[{}] ({}): no readings to process.", self.name, label)
            }
            ProcessOutcome::Averaged { average, count } => write!(
                f,
                "[{}] ({}): average {} over {} reading{}.",
                self.name,
                label,
                average,
                count,
                if *count == 1 { "" } else { "s" }
            ),
            ProcessOutcome::MinimumDropped {
                minimum,
                remaining_average,
                ..
            } => write!(
                f,
                "[{}] ({}): lowest reading ({}) removed. Remaining average: {}.",
                self.name, label, minimum, remaining_average
            ),
        }
    }
}

/// Observational summary of a sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorInfo {
    pub name: String,
    pub kind: SensorKind,
    pub reading_type: &'static str,
    pub reading_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Reading>,
}

impl fmt::Display for SensorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = format!("=== {} Sensor ===", self.kind.label());
        writeln!(f, "{}", heading)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Kind: {} ({})", self.kind.label(), self.reading_type)?;
        writeln!(f, "Readings: {}", self.reading_count)?;
        if let Some(average) = self.average {
            writeln!(f, "Average: {}", average)?;
        }
        write!(f, "{}", "=".repeat(heading.len()))
    }
}

/// The capability contract every sensor kind implements
pub trait Sensor {
    /// The sensor's identifier
    fn name(&self) -> &str;

    /// Replace the sensor's identifier
    ///
    /// The name arrives already bounded; readings are untouched.
    fn set_name(&mut self, name: SensorName);

    /// The sensor's kind, fixed at creation
    fn kind(&self) -> SensorKind;

    /// Apply this kind's processing policy to the current readings
    fn process(&mut self) -> ProcessOutcome;

    /// Summarize the sensor without changing it
    fn describe(&self) -> SensorInfo;

    /// Number of readings currently held
    fn reading_count(&self) -> usize;

    /// Check if any readings are held
    fn has_readings(&self) -> bool {
        self.reading_count() > 0
    }

    /// All readings in recording order, as display text
    fn history_text(&self) -> String;
}

/// Builds the shared description for a sensor holding `history`
pub(crate) fn describe_history<T>(
    name: &SensorName,
    kind: SensorKind,
    history: &sensorium_history::ReadingSequence<T>,
) -> SensorInfo
where
    T: Numeric + Into<Reading>,
{
    SensorInfo {
        name: name.to_string(),
        kind,
        reading_type: T::TYPE_NAME,
        reading_count: history.len(),
        average: (!history.is_empty()).then(|| history.average().into()),
    }
}

pub(crate) fn history_text<T: fmt::Display>(
    name: &SensorName,
    history: &sensorium_history::ReadingSequence<T>,
) -> String {
    if history.is_empty() {
        format!("History of {}: (no readings)", name)
    } else {
        format!("History of {}: {}", name, history)
    }
}

/// A sensor of either kind
#[derive(Debug, Clone, PartialEq)]
pub enum AnySensor {
    Temperature(TemperatureSensor),
    Pressure(PressureSensor),
}

impl AnySensor {
    /// Create an empty sensor of `kind`
    pub fn new(kind: SensorKind, name: SensorName) -> Self {
        match kind {
            SensorKind::Temperature => AnySensor::Temperature(TemperatureSensor::with_name(name)),
            SensorKind::Pressure => AnySensor::Pressure(PressureSensor::with_name(name)),
        }
    }

    /// Get the temperature sensor, if this is one
    pub fn as_temperature(&self) -> Option<&TemperatureSensor> {
        match self {
            AnySensor::Temperature(sensor) => Some(sensor),
            AnySensor::Pressure(_) => None,
        }
    }

    /// Get the temperature sensor mutably, if this is one
    pub fn as_temperature_mut(&mut self) -> Option<&mut TemperatureSensor> {
        match self {
            AnySensor::Temperature(sensor) => Some(sensor),
            AnySensor::Pressure(_) => None,
        }
    }

    /// Get the pressure sensor, if this is one
    pub fn as_pressure(&self) -> Option<&PressureSensor> {
        match self {
            AnySensor::Pressure(sensor) => Some(sensor),
            AnySensor::Temperature(_) => None,
        }
    }

    /// Get the pressure sensor mutably, if this is one
    pub fn as_pressure_mut(&mut self) -> Option<&mut PressureSensor> {
        match self {
            AnySensor::Pressure(sensor) => Some(sensor),
            AnySensor::Temperature(_) => None,
        }
    }

    /// Record a reading, checking that its type matches this sensor's kind
    ///
    /// A mismatched reading, or a temperature that is NaN or infinite, is
    /// rejected and the sensor is left unchanged.
    pub fn record(&mut self, reading: Reading) -> Result<()> {
        match (self, reading) {
            (AnySensor::Temperature(sensor), Reading::Float(value)) => {
                if !value.is_finite() {
                    return Err(RegistryError::non_finite_reading(sensor.name(), value));
                }
                sensor.record_reading(value);
                Ok(())
            }
            (AnySensor::Pressure(sensor), Reading::Int(value)) => {
                sensor.record_reading(value);
                Ok(())
            }
            (sensor, _) => Err(RegistryError::reading_type_mismatch(
                sensor.name(),
                sensor.kind(),
            )),
        }
    }
}

impl Sensor for AnySensor {
    fn name(&self) -> &str {
        match self {
            AnySensor::Temperature(sensor) => sensor.name(),
            AnySensor::Pressure(sensor) => sensor.name(),
        }
    }

    fn set_name(&mut self, name: SensorName) {
        match self {
            AnySensor::Temperature(sensor) => sensor.set_name(name),
            AnySensor::Pressure(sensor) => sensor.set_name(name),
        }
    }

    fn kind(&self) -> SensorKind {
        match self {
            AnySensor::Temperature(_) => SensorKind::Temperature,
            AnySensor::Pressure(_) => SensorKind::Pressure,
        }
    }

    fn process(&mut self) -> ProcessOutcome {
        match self {
            AnySensor::Temperature(sensor) => sensor.process(),
            AnySensor::Pressure(sensor) => sensor.process(),
        }
    }

    fn describe(&self) -> SensorInfo {
        match self {
            AnySensor::Temperature(sensor) => sensor.describe(),
            AnySensor::Pressure(sensor) => sensor.describe(),
        }
    }

    fn reading_count(&self) -> usize {
        match self {
            AnySensor::Temperature(sensor) => sensor.reading_count(),
            AnySensor::Pressure(sensor) => sensor.reading_count(),
        }
    }

    fn history_text(&self) -> String {
        match self {
            AnySensor::Temperature(sensor) => sensor.history_text(),
            AnySensor::Pressure(sensor) => sensor.history_text(),
        }
    }
}

impl From<TemperatureSensor> for AnySensor {
    fn from(sensor: TemperatureSensor) -> Self {
        AnySensor::Temperature(sensor)
    }
}

impl From<PressureSensor> for AnySensor {
    fn from(sensor: PressureSensor) -> Self {
        AnySensor::Pressure(sensor)
    }
}
