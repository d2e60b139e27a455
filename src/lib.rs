//! # Sensorium - an in-memory registry of typed sensors
//!
//! Sensorium keeps a session's sensors in one owning [`SensorRegistry`]. Each
//! sensor records readings of a fixed numeric type into a
//! [`ReadingSequence`] and applies its own processing policy when the
//! registry processes every sensor:
//!
//! - **Temperature** sensors record `f32` readings and drop their lowest
//!   reading on each pass once they hold more than one
//! - **Pressure** sensors record `i32` readings and only report their average
//!
//! State changes are reported to a [`SensorObserver`] instead of being
//! printed, and [`command::Command`] gives interactive shells a small text
//! interface over the registry.
//!
//! ## Quick Start
//!
//! ```rust
//! use sensorium::{SensorKind, SensorRegistry};
//!
//! let mut registry = SensorRegistry::new();
//! registry.create_sensor(SensorKind::Temperature, "T1").unwrap();
//! for value in [5.0_f32, 1.0, 3.0] {
//!     registry.record_reading("T1", value).unwrap();
//! }
//!
//! let reports = registry.process_all();
//! assert_eq!(
//!     reports[0].to_string(),
//!     "[T1] (Temperature): lowest reading (1) removed. Remaining average: 4."
//! );
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod observer;
pub mod registry;
pub mod sensor;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types
pub use command::Command;
pub use config::Config;
pub use error::{RegistryError, Result};
pub use observer::{SensorEvent, SensorObserver, memory::MemObserver, tracer::TracingObserver};
pub use registry::{SensorHandle, SensorRegistry};
pub use sensor::{
    AnySensor, PressureSensor, ProcessOutcome, ProcessReport, Reading, Sensor, SensorInfo,
    SensorKind, SensorName, TemperatureSensor,
};

// Re-export the history container
pub use sensorium_history::{Numeric, ReadingSequence};
