use std::{cell::RefCell, rc::Rc};

use super::{SensorEvent, SensorObserver};

/// A memory-based observer that keeps every event it receives.
///
/// Clones share the same buffer, so a caller can hand one clone to the
/// registry and inspect the events through another.
#[derive(Clone, Debug, Default)]
pub struct MemObserver {
    events: Rc<RefCell<Vec<SensorEvent>>>, // Events in the order they were emitted.
}

impl MemObserver {
    /// Creates a new instance of `MemObserver`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event received so far.
    pub fn events(&self) -> Vec<SensorEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns every event received so far.
    pub fn take(&self) -> Vec<SensorEvent> {
        self.events.take()
    }

    /// Number of events received.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Checks if no events were received.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clears the recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SensorObserver for MemObserver {
    fn notify(&mut self, event: &SensorEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{Reading, SensorKind};

    #[test]
    fn test_mem_observer_records_in_order() {
        let observer = MemObserver::new();
        let mut handle = observer.clone();

        handle.notify(&SensorEvent::SensorCreated {
            name: "T1".to_string(),
            kind: SensorKind::Temperature,
            position: 1,
        });
        handle.notify(&SensorEvent::ReadingRecorded {
            name: "T1".to_string(),
            reading: Reading::Float(5.0),
        });

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SensorEvent::SensorCreated { .. }));
        assert!(matches!(events[1], SensorEvent::ReadingRecorded { .. }));
    }

    #[test]
    fn test_mem_observer_take_and_clear() {
        let mut observer = MemObserver::new();
        let event = SensorEvent::ReadingRecorded {
            name: "P1".to_string(),
            reading: Reading::Int(3),
        };

        observer.notify(&event);
        assert_eq!(observer.take(), vec![event.clone()]);
        assert!(observer.is_empty());

        observer.notify(&event);
        observer.clear();
        assert_eq!(observer.len(), 0);
    }
}
