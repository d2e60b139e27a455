//! Bounded sensor identifiers

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// Default maximum number of characters kept in a sensor name
pub const DEFAULT_NAME_CAPACITY: usize = 49;

/// Name used when neither the caller nor the kind supplies one
const FALLBACK_NAME: &str = "Sensor_Default";

/// A non-empty sensor name of bounded length
///
/// Names longer than the capacity are truncated on a character boundary.
/// Surrounding whitespace is trimmed, and a blank name is replaced by the
/// supplied default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SensorName(String);

impl SensorName {
    /// Create a name from `raw`, keeping at most `capacity` characters
    ///
    /// `default` is used when `raw` is blank. A capacity of zero is treated as
    /// one so the name is never empty.
    pub fn new(raw: &str, capacity: usize, default: &str) -> Self {
        let trimmed = raw.trim();
        let source = if !trimmed.is_empty() {
            trimmed
        } else if !default.trim().is_empty() {
            default.trim()
        } else {
            FALLBACK_NAME
        };

        let capacity = capacity.max(1);
        let name: String = source.chars().take(capacity).collect();
        if name.len() < source.len() {
            tracing::debug!(original = source, truncated = %name, "sensor name truncated");
        }

        Self(name)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SensorName {
    fn from(raw: &str) -> Self {
        Self::new(raw, DEFAULT_NAME_CAPACITY, FALLBACK_NAME)
    }
}

impl Deref for SensorName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SensorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SensorName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SensorName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SensorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
