//! The command interface used by interactive shells
//!
//! A shell reads a line, turns it into a [`Command`] with [`Command::parse`],
//! and runs it with [`Command::execute`]. Every command produces text for the
//! shell to print; the registry itself never writes to the console.
//!
//! Both word commands and the classic numbered menu are understood:
//!
//! | Word                      | Menu | Effect                              |
//! |---------------------------|------|-------------------------------------|
//! | `temp <name>`             | `1`  | create a temperature sensor         |
//! | `pressure <name>`         | `2`  | create a pressure sensor            |
//! | `record <name> <value>`   | `3`  | record a reading                    |
//! | `process`                 | `4`  | process every sensor                |
//! | `info <name>`             | `5`  | describe a sensor                   |
//! | `list`                    | `6`  | list every sensor                   |
//! | `history <name>`          | `7`  | show a sensor's readings            |
//! | `quit`                    | `8`  | end the session                     |
//! | `rename <name> <new>`     |      | rename a sensor                     |
//! | `remove <name>`           |      | destroy a sensor                    |
//! | `help`                    |      | show this summary                   |

use crate::error::{RegistryError, Result};
use crate::observer::SensorObserver;
use crate::registry::SensorRegistry;
use crate::sensor::{Reading, Sensor, SensorKind};

/// Summary printed by `help`
pub const HELP: &str = "\
Commands:
  1 | temp <name>             create a temperature sensor (float readings)
  2 | pressure <name>         create a pressure sensor (int readings)
  3 | record <name> <value>   record a reading
  4 | process                 process every sensor
  5 | info <name>             describe a sensor
  6 | list                    list every sensor
  7 | history <name>          show a sensor's readings
  8 | quit                    close the session and release every sensor
      rename <name> <new>     rename a sensor
      remove <name>           destroy a sensor
      help                    show this summary";

/// A single shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create { kind: SensorKind, name: String },
    Record { name: String, value: String },
    ProcessAll,
    Describe { name: String },
    List,
    History { name: String },
    Rename { name: String, new_name: String },
    Remove { name: String },
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input
    ///
    /// The reading value of `record` is kept as text: which numeric type it
    /// must parse as depends on the sensor it targets.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(RegistryError::invalid_input("empty command"));
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "1" | "temp" | "temperature" => Command::Create {
                kind: SensorKind::Temperature,
                name: required(&mut words, "sensor name")?,
            },
            "2" | "pressure" => Command::Create {
                kind: SensorKind::Pressure,
                name: required(&mut words, "sensor name")?,
            },
            "3" | "record" => Command::Record {
                name: required(&mut words, "sensor name")?,
                value: required(&mut words, "reading value")?,
            },
            "4" | "process" => Command::ProcessAll,
            "5" | "info" | "describe" => Command::Describe {
                name: required(&mut words, "sensor name")?,
            },
            "6" | "list" => Command::List,
            "7" | "history" => Command::History {
                name: required(&mut words, "sensor name")?,
            },
            "8" | "quit" | "exit" => Command::Quit,
            "rename" | "mv" => Command::Rename {
                name: required(&mut words, "sensor name")?,
                new_name: required(&mut words, "new sensor name")?,
            },
            "remove" | "rm" => Command::Remove {
                name: required(&mut words, "sensor name")?,
            },
            "help" | "?" => Command::Help,
            other => {
                return Err(RegistryError::invalid_input(format!(
                    "unknown command '{}'",
                    other
                )));
            }
        };

        if let Some(extra) = words.next() {
            return Err(RegistryError::invalid_input(format!(
                "unexpected argument '{}'",
                extra
            )));
        }

        Ok(command)
    }

    /// Run the command against `registry` and return the text to display
    pub fn execute<O: SensorObserver>(self, registry: &mut SensorRegistry<O>) -> Result<String> {
        tracing::debug!(command = ?self, "executing command");

        match self {
            Command::Create { kind, name } => {
                let handle = registry.create_sensor(kind, &name)?;
                let name = registry
                    .get(handle)
                    .map(|sensor| sensor.name().to_string())
                    .unwrap_or(name);
                Ok(format!(
                    "Sensor '{}' ({}, {}) created and registered.",
                    name,
                    kind,
                    kind.reading_type()
                ))
            }
            Command::Record { name, value } => {
                let kind = registry
                    .find_by_name(&name)
                    .map(|sensor| sensor.kind())
                    .ok_or_else(|| RegistryError::not_found(name.as_str()))?;
                let reading = parse_reading(kind, &value)?;
                registry.record_reading(&name, reading)?;
                Ok(format!(
                    "ID: {}. Value: {} ({})",
                    name,
                    reading,
                    kind.reading_type()
                ))
            }
            Command::ProcessAll => {
                let reports = registry.process_all();
                if reports.is_empty() {
                    return Ok("No sensors registered to process.".to_string());
                }
                Ok(reports
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::Describe { name } => registry
                .describe(&name)
                .ok_or_else(|| RegistryError::not_found(name)),
            Command::List => {
                let sensors = registry.list_all();
                if sensors.is_empty() {
                    return Ok("No sensors registered.".to_string());
                }
                Ok(sensors
                    .iter()
                    .map(|(position, name)| format!("{}. {}", position, name))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::History { name } => registry
                .history(&name)
                .ok_or_else(|| RegistryError::not_found(name)),
            Command::Rename { name, new_name } => {
                let handle = registry.rename(&name, &new_name)?;
                let new_name = registry
                    .get(handle)
                    .map(|sensor| sensor.name().to_string())
                    .unwrap_or(new_name);
                Ok(format!("Sensor '{}' renamed to '{}'.", name, new_name))
            }
            Command::Remove { name } => {
                if registry.remove(&name) {
                    Ok(format!("Sensor '{}' removed.", name))
                } else {
                    Err(RegistryError::not_found(name))
                }
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Closing system...".to_string()),
        }
    }
}

/// Parse `value` as the reading type `kind` records
pub fn parse_reading(kind: SensorKind, value: &str) -> Result<Reading> {
    let reading = match kind {
        SensorKind::Temperature => value
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Reading::Float),
        SensorKind::Pressure => value.parse::<i32>().ok().map(Reading::Int),
    };

    reading.ok_or_else(|| {
        RegistryError::invalid_input(format!(
            "'{}' is not a valid {} reading for a {} sensor",
            value,
            kind.reading_type(),
            kind
        ))
    })
}

fn required<'a, I>(words: &mut I, what: &str) -> Result<String>
where
    I: Iterator<Item = &'a str>,
{
    words
        .next()
        .map(str::to_string)
        .ok_or_else(|| RegistryError::invalid_input(format!("missing {}", what)))
}
