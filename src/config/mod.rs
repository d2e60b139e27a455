use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::sensor::{
    DEFAULT_NAME_CAPACITY, DEFAULT_PRESSURE_NAME, DEFAULT_TEMPERATURE_NAME, SensorKind,
    SensorName,
};

/// Registry configuration
///
/// Every field has a default, so a configuration file only needs to name the
/// settings it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of characters kept in a sensor name
    pub name_capacity: usize,

    /// Name given to temperature sensors created with a blank name
    pub default_temperature_name: String,

    /// Name given to pressure sensors created with a blank name
    pub default_pressure_name: String,

    /// Reject a new sensor whose name is already registered
    pub unique_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_capacity: DEFAULT_NAME_CAPACITY,
            default_temperature_name: DEFAULT_TEMPERATURE_NAME.to_string(),
            default_pressure_name: DEFAULT_PRESSURE_NAME.to_string(),
            unique_names: false,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.name_capacity == 0 {
            return Err(RegistryError::config("name_capacity must be at least 1"));
        }

        for (field, value) in [
            ("default_temperature_name", &self.default_temperature_name),
            ("default_pressure_name", &self.default_pressure_name),
        ] {
            if value.trim().is_empty() {
                return Err(RegistryError::config(format!("{} cannot be blank", field)));
            }
        }

        Ok(())
    }

    /// Default name for sensors of `kind`
    pub fn default_name(&self, kind: SensorKind) -> &str {
        match kind {
            SensorKind::Temperature => &self.default_temperature_name,
            SensorKind::Pressure => &self.default_pressure_name,
        }
    }

    /// Bound `raw` to this configuration's capacity and defaults
    pub fn sensor_name(&self, kind: SensorKind, raw: &str) -> SensorName {
        SensorName::new(raw, self.name_capacity, self.default_name(kind))
    }
}
