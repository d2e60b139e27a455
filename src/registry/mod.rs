//! The sensor registry
//!
//! [`SensorRegistry`] owns every sensor of a session in insertion order. It is
//! the only place sensors are created, looked up, processed and destroyed, and
//! it reports each of those state changes to its [`SensorObserver`].

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::observer::{SensorEvent, SensorObserver};
use crate::sensor::{AnySensor, ProcessReport, Reading, Sensor, SensorKind};

/// Stable reference to a registered sensor
///
/// Handles stay valid when other sensors are removed; a handle to a removed
/// sensor simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensorHandle(u64);

#[derive(Debug)]
struct Entry {
    handle: SensorHandle,
    sensor: AnySensor,
}

/// An insertion-ordered, owning collection of sensors
///
/// Names are not required to be unique unless [`Config::unique_names`] is set.
/// With duplicates, lookups by name always resolve to the earliest sensor.
///
/// # Type Parameters
///
/// * `O`: The observer notified of every state change. Defaults to `()`,
///   which ignores them.
#[derive(Debug)]
pub struct SensorRegistry<O: SensorObserver = ()> {
    sensors: Vec<Entry>,
    next_handle: u64,
    observer: O,
    config: Config,
}

impl SensorRegistry<()> {
    /// Constructs an empty registry with the default configuration and no observer.
    pub fn new() -> Self {
        Self::with_config(Config::default(), ())
    }
}

impl Default for SensorRegistry<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: SensorObserver> SensorRegistry<O> {
    /// Constructs an empty registry reporting to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self::with_config(Config::default(), observer)
    }

    /// Constructs an empty registry with the given configuration and observer.
    pub fn with_config(config: Config, observer: O) -> Self {
        tracing::debug!(?config, "sensor registry created");
        Self {
            sensors: Vec::new(),
            next_handle: 0,
            observer,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The observer receiving state changes.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Creates an empty sensor of `kind` and appends it.
    ///
    /// The name is bounded by the configured capacity; a blank name becomes
    /// the configured default for the kind.
    pub fn create_sensor(&mut self, kind: SensorKind, name: &str) -> Result<SensorHandle> {
        let name = self.config.sensor_name(kind, name);
        self.insert(AnySensor::new(kind, name))
    }

    /// Appends a sensor at the end of the registry.
    pub fn insert<S: Into<AnySensor>>(&mut self, sensor: S) -> Result<SensorHandle> {
        let sensor = sensor.into();

        if self.find_by_name(sensor.name()).is_some() {
            if self.config.unique_names {
                return Err(RegistryError::duplicate_name(sensor.name()));
            }
            tracing::warn!(
                sensor = sensor.name(),
                "name already registered; lookups by name will resolve to the earlier sensor"
            );
        }

        let handle = SensorHandle(self.next_handle);
        self.next_handle += 1;

        let event = SensorEvent::SensorCreated {
            name: sensor.name().to_string(),
            kind: sensor.kind(),
            position: self.sensors.len() + 1,
        };
        self.sensors.push(Entry { handle, sensor });
        self.observer.notify(&event);

        Ok(handle)
    }

    /// Returns the first sensor named `name`, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&AnySensor> {
        self.sensors
            .iter()
            .find(|entry| entry.sensor.name() == name)
            .map(|entry| &entry.sensor)
    }

    /// Returns the first sensor named `name` mutably.
    ///
    /// Changes made through this reference bypass the observer.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut AnySensor> {
        self.sensors
            .iter_mut()
            .find(|entry| entry.sensor.name() == name)
            .map(|entry| &mut entry.sensor)
    }

    /// Resolves a handle.
    pub fn get(&self, handle: SensorHandle) -> Option<&AnySensor> {
        self.sensors
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| &entry.sensor)
    }

    /// Resolves a handle mutably.
    ///
    /// Changes made through this reference bypass the observer.
    pub fn get_mut(&mut self, handle: SensorHandle) -> Option<&mut AnySensor> {
        self.sensors
            .iter_mut()
            .find(|entry| entry.handle == handle)
            .map(|entry| &mut entry.sensor)
    }

    /// Records a reading on the first sensor named `name`.
    ///
    /// Fails with [`RegistryError::NotFound`] when no sensor matches, or with
    /// [`RegistryError::ReadingTypeMismatch`] when the reading's type does not
    /// suit the sensor's kind. Either way nothing changes.
    pub fn record_reading<R: Into<Reading>>(&mut self, name: &str, reading: R) -> Result<()> {
        let index = self
            .position_of(name)
            .ok_or_else(|| RegistryError::not_found(name))?;
        self.record_at(index, reading.into())
    }

    /// Records a reading on the sensor behind `handle`.
    pub fn record_reading_by_handle<R: Into<Reading>>(
        &mut self,
        handle: SensorHandle,
        reading: R,
    ) -> Result<()> {
        let index = self
            .sensors
            .iter()
            .position(|entry| entry.handle == handle)
            .ok_or_else(|| RegistryError::not_found(format!("#{}", handle.0)))?;
        self.record_at(index, reading.into())
    }

    fn record_at(&mut self, index: usize, reading: Reading) -> Result<()> {
        let sensor = &mut self.sensors[index].sensor;
        sensor.record(reading)?;

        let event = SensorEvent::ReadingRecorded {
            name: sensor.name().to_string(),
            reading,
        };
        self.observer.notify(&event);
        Ok(())
    }

    /// Processes every sensor in insertion order.
    ///
    /// Each sensor applies its own kind's policy. Returns one report per
    /// sensor; the result is empty when no sensors are registered.
    pub fn process_all(&mut self) -> Vec<ProcessReport> {
        if self.sensors.is_empty() {
            tracing::debug!("no sensors registered to process");
            return Vec::new();
        }

        let mut reports = Vec::with_capacity(self.sensors.len());
        for entry in self.sensors.iter_mut() {
            let outcome = entry.sensor.process();
            let name = entry.sensor.name().to_string();

            if let Some(reading) = outcome.extracted() {
                self.observer.notify(&SensorEvent::ReadingExtracted {
                    name: name.clone(),
                    reading,
                });
            }
            self.observer.notify(&SensorEvent::SensorProcessed {
                name: name.clone(),
                outcome,
            });

            reports.push(ProcessReport {
                name,
                kind: entry.sensor.kind(),
                outcome,
            });
        }

        reports
    }

    /// Describes the first sensor named `name`.
    pub fn describe(&self, name: &str) -> Option<String> {
        self.find_by_name(name)
            .map(|sensor| sensor.describe().to_string())
    }

    /// Renders the reading history of the first sensor named `name`.
    pub fn history(&self, name: &str) -> Option<String> {
        self.find_by_name(name).map(|sensor| sensor.history_text())
    }

    /// Lists every sensor name with its 1-based position, in insertion order.
    pub fn list_all(&self) -> Vec<(usize, String)> {
        self.sensors
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.sensor.name().to_string()))
            .collect()
    }

    /// Renames the first sensor named `name`.
    ///
    /// The new name is bounded by the configured capacity, and a blank one
    /// becomes the configured default for the sensor's kind. With
    /// [`Config::unique_names`] set, a name held by another sensor is rejected
    /// with [`RegistryError::DuplicateName`]. Returns the sensor's handle.
    pub fn rename(&mut self, name: &str, new_name: &str) -> Result<SensorHandle> {
        let index = self
            .position_of(name)
            .ok_or_else(|| RegistryError::not_found(name))?;
        let kind = self.sensors[index].sensor.kind();
        let new_name = self.config.sensor_name(kind, new_name);

        let taken = self
            .sensors
            .iter()
            .enumerate()
            .any(|(i, entry)| i != index && entry.sensor.name() == new_name.as_str());
        if taken {
            if self.config.unique_names {
                return Err(RegistryError::duplicate_name(new_name.as_str()));
            }
            tracing::warn!(
                sensor = %new_name,
                "name already registered; lookups by name will resolve to the earlier sensor"
            );
        }

        let entry = &mut self.sensors[index];
        let old_name = entry.sensor.name().to_string();
        entry.sensor.set_name(new_name);

        let handle = entry.handle;
        let event = SensorEvent::SensorRenamed {
            old_name,
            name: entry.sensor.name().to_string(),
        };
        self.observer.notify(&event);
        Ok(handle)
    }

    /// Destroys the first sensor named `name`.
    ///
    /// Returns `false` if no sensor matched.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                let entry = self.sensors.remove(index);
                self.release(entry);
                true
            }
            None => false,
        }
    }

    /// Number of registered sensors.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Checks if no sensors are registered.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Iterates over sensors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AnySensor> {
        self.sensors.iter().map(|entry| &entry.sensor)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.sensors
            .iter()
            .position(|entry| entry.sensor.name() == name)
    }

    fn release(&mut self, entry: Entry) {
        let sensor = entry.sensor;
        self.observer.notify(&SensorEvent::SensorDestroyed {
            name: sensor.name().to_string(),
            kind: sensor.kind(),
            released_readings: sensor.reading_count(),
        });
        // The history goes with the sensor.
        drop(sensor);
    }
}

impl<O: SensorObserver> Drop for SensorRegistry<O> {
    /// Destroys every sensor in insertion order.
    fn drop(&mut self) {
        let sensors = std::mem::take(&mut self.sensors);
        for entry in sensors {
            self.release(entry);
        }
        tracing::debug!("sensor registry released");
    }
}
