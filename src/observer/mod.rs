use std::fmt::Debug;

use serde::Serialize;

use crate::sensor::{ProcessOutcome, Reading, SensorKind};

pub mod memory;
pub mod tracer;

/// A state change inside the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SensorEvent {
    /// A sensor was created and appended to the registry.
    SensorCreated {
        name: String,
        kind: SensorKind,
        position: usize,
    },
    /// A sensor was given a new name. `name` is the new one.
    SensorRenamed { old_name: String, name: String },
    /// A reading was appended to a sensor's history.
    ReadingRecorded { name: String, reading: Reading },
    /// Processing permanently removed a reading.
    ReadingExtracted { name: String, reading: Reading },
    /// A sensor was processed.
    SensorProcessed {
        name: String,
        outcome: ProcessOutcome,
    },
    /// A sensor and its history were released.
    SensorDestroyed {
        name: String,
        kind: SensorKind,
        released_readings: usize,
    },
}

impl SensorEvent {
    /// Name of the sensor the event concerns.
    pub fn sensor_name(&self) -> &str {
        match self {
            SensorEvent::SensorCreated { name, .. }
            | SensorEvent::SensorRenamed { name, .. }
            | SensorEvent::ReadingRecorded { name, .. }
            | SensorEvent::ReadingExtracted { name, .. }
            | SensorEvent::SensorProcessed { name, .. }
            | SensorEvent::SensorDestroyed { name, .. } => name,
        }
    }
}

/// A trait representing an observer of registry state changes.
///
/// The registry calls [`SensorObserver::notify`] after every mutation, so a
/// shell or test harness can follow along without the core doing any output.
pub trait SensorObserver: Debug {
    /// Receives a single event.
    fn notify(&mut self, event: &SensorEvent);
}

impl SensorObserver for () {
    fn notify(&mut self, _event: &SensorEvent) {}
}

impl<O: SensorObserver + ?Sized> SensorObserver for Box<O> {
    fn notify(&mut self, event: &SensorEvent) {
        (**self).notify(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sensor_name() {
        let event = SensorEvent::ReadingRecorded {
            name: "T1".to_string(),
            reading: Reading::Float(21.5),
        };
        assert_eq!(event.sensor_name(), "T1");
    }

    #[test]
    fn test_renamed_event_reports_new_name() {
        let event = SensorEvent::SensorRenamed {
            old_name: "T1".to_string(),
            name: "Outdoor".to_string(),
        };
        assert_eq!(event.sensor_name(), "Outdoor");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({
                "event": "sensor_renamed",
                "old_name": "T1",
                "name": "Outdoor"
            })
        );
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = SensorEvent::SensorCreated {
            name: "P1".to_string(),
            kind: SensorKind::Pressure,
            position: 1,
        };
        let expected = serde_json::json!({
            "event": "sensor_created",
            "name": "P1",
            "kind": "pressure",
            "position": 1
        });
        assert_eq!(serde_json::to_value(&event).unwrap(), expected);
    }

    #[test]
    fn test_boxed_observer_forwards() {
        let recorder = memory::MemObserver::new();
        let mut boxed: Box<dyn SensorObserver> = Box::new(recorder.clone());

        boxed.notify(&SensorEvent::ReadingExtracted {
            name: "T1".to_string(),
            reading: Reading::Float(1.0),
        });
        assert_eq!(recorder.len(), 1);
    }
}
