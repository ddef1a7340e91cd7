//! A mutable, width-truncated storage unit (spec §4.1).

use crate::observer::{ChangeEvent, Location, Observers};

/// A single cell of memory, truncated to `width` bits on every write.
///
/// Created zero. `width` is fixed for the lifetime of the cell (it is set
/// once, from the owning [`crate::memory::Memory`]'s `Params::block_size`).
#[derive(Debug, Clone)]
pub struct Cell {
    value: u64,
    width: u32,
    observers: Observers,
}

impl Cell {
    /// Creates a zero cell truncated to `width` bits.
    pub fn new(width: u32) -> Self {
        Self {
            value: 0,
            width,
            observers: Observers::new(),
        }
    }

    /// Reads the current value.
    pub fn get(&self) -> u64 {
        self.value
    }

    /// Width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    fn mask(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    /// Sets the value, truncated to the low `width` bits. Notifies any
    /// attached observers with `location` synchronously after the write.
    pub fn set_at(&mut self, value: u64, location: Location) {
        let truncated = value & self.mask();
        let old = self.value;
        self.value = truncated;
        if old != truncated {
            self.observers.notify(ChangeEvent {
                location,
                old,
                new: truncated,
            });
        }
    }

    /// Attaches an observer to this cell.
    pub fn attach(&mut self, observer: std::sync::Arc<dyn crate::observer::Observer>) {
        self.observers.attach(observer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_width() {
        let mut cell = Cell::new(4);
        cell.set_at(0xFF, Location::Cell(0));
        assert_eq!(cell.get(), 0xF);
    }

    #[test]
    fn starts_zero() {
        let cell = Cell::new(4);
        assert_eq!(cell.get(), 0);
    }

    #[test]
    fn notifies_observers_on_change() {
        use crate::observer::Observer;
        use std::sync::{Arc, Mutex};

        struct Recorder(Mutex<Vec<ChangeEvent>>);
        impl Observer for Recorder {
            fn on_change(&self, event: ChangeEvent) {
                self.0.lock().unwrap().push(event);
            }
        }

        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut cell = Cell::new(4);
        cell.attach(recorder.clone());
        cell.set_at(5, Location::Cell(3));

        let recorded = recorder.0.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].new, 5);
        assert_eq!(recorded[0].location, Location::Cell(3));
    }

    #[test]
    fn no_notification_when_value_unchanged() {
        use crate::observer::Observer;
        use std::sync::{Arc, Mutex};

        struct Recorder(Mutex<usize>);
        impl Observer for Recorder {
            fn on_change(&self, _event: ChangeEvent) {
                *self.0.lock().unwrap() += 1;
            }
        }

        let recorder = Arc::new(Recorder(Mutex::new(0)));
        let mut cell = Cell::new(4);
        cell.attach(recorder.clone());
        cell.set_at(0, Location::Cell(0));
        assert_eq!(*recorder.0.lock().unwrap(), 0);
    }
}
