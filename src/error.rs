//! Error types for registry operations

use thiserror::Error;

use crate::sensor::SensorKind;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while driving the registry
///
/// Empty histories are never an error: averages and extractions on an empty
/// sensor return zero values or a "nothing to process" outcome instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No sensor with this name is registered
    #[error("Sensor '{name}' not found")]
    NotFound { name: String },

    /// A sensor with this name already exists and unique names are enforced
    #[error("Sensor '{name}' already exists")]
    DuplicateName { name: String },

    /// The reading's numeric type does not match the sensor kind
    #[error("Sensor '{name}' is a {kind} sensor and only accepts {expected} readings")]
    ReadingTypeMismatch {
        name: String,
        kind: SensorKind,
        expected: &'static str,
    },

    /// A floating-point reading that is NaN or infinite
    #[error("Sensor '{name}' only accepts finite readings, got {value}")]
    NonFiniteReading { name: String, value: f32 },

    /// Malformed input at the shell boundary
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RegistryError {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a duplicate name error
    pub fn duplicate_name<S: Into<String>>(name: S) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a reading type mismatch error for a sensor of `kind`
    pub fn reading_type_mismatch<S: Into<String>>(name: S, kind: SensorKind) -> Self {
        Self::ReadingTypeMismatch {
            name: name.into(),
            kind,
            expected: kind.reading_type(),
        }
    }

    /// Create a non-finite reading error
    pub fn non_finite_reading<S: Into<String>>(name: S, value: f32) -> Self {
        Self::NonFiniteReading {
            name: name.into(),
            value,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
