use super::{SensorEvent, SensorObserver};

/// An observer that narrates every event through `tracing`.
///
/// Events are emitted at `INFO` under the `sensorium::events` target, so they
/// can be filtered separately from the library's own debug output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SensorObserver for TracingObserver {
    fn notify(&mut self, event: &SensorEvent) {
        match event {
            SensorEvent::SensorCreated {
                name,
                kind,
                position,
            } => {
                tracing::info!(
                    target: "sensorium::events",
                    sensor = %name,
                    %kind,
                    position,
                    "sensor created and registered"
                );
            }
            SensorEvent::SensorRenamed { old_name, name } => {
                tracing::info!(
                    target: "sensorium::events",
                    sensor = %name,
                    old_name = %old_name,
                    "sensor renamed"
                );
            }
            SensorEvent::ReadingRecorded { name, reading } => {
                tracing::info!(
                    target: "sensorium::events",
                    sensor = %name,
                    %reading,
                    "reading recorded"
                );
            }
            SensorEvent::ReadingExtracted { name, reading } => {
                tracing::info!(
                    target: "sensorium::events",
                    sensor = %name,
                    %reading,
                    "lowest reading released"
                );
            }
            SensorEvent::SensorProcessed { name, outcome } => {
                tracing::info!(
                    target: "sensorium::events",
                    sensor = %name,
                    ?outcome,
                    "sensor processed"
                );
            }
            SensorEvent::SensorDestroyed {
                name,
                kind,
                released_readings,
            } => {
                tracing::info!(
                    target: "sensorium::events",
                    sensor = %name,
                    %kind,
                    released_readings,
                    "sensor destroyed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{Reading, SensorKind};

    #[test]
    fn test_tracing_observer_accepts_every_event() {
        let mut observer = TracingObserver;
        let events = [
            SensorEvent::SensorCreated {
                name: "T1".to_string(),
                kind: SensorKind::Temperature,
                position: 1,
            },
            SensorEvent::SensorRenamed {
                old_name: "T1".to_string(),
                name: "Outdoor".to_string(),
            },
            SensorEvent::ReadingRecorded {
                name: "Outdoor".to_string(),
                reading: Reading::Float(2.5),
            },
            SensorEvent::SensorDestroyed {
                name: "Outdoor".to_string(),
                kind: SensorKind::Temperature,
                released_readings: 1,
            },
        ];
        for event in &events {
            observer.notify(event);
        }
    }
}
