//! Observation points for Cell/Register/Memory mutation (spec §9:
//! "Observability without inheritance").
//!
//! The source uses subclassing to get observable variants of its cells and
//! registers. We replace that with a plain interface: every mutation emits
//! a [`ChangeEvent`] to the location's attached observers. Observers are
//! passive; [`Observer::on_change`] takes `&self` so a subscriber cannot
//! reach back into the mutation it is being told about.

use std::sync::Arc;

/// Identifies which piece of state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// A memory cell at the given address.
    Cell(usize),
    /// A general-purpose register at the given index.
    Register(usize),
    /// The program counter.
    Pc,
    /// The instruction register.
    Ir,
    /// The next-move register.
    Nr,
    /// The status register.
    Sr,
}

/// A mutation of a single location, carrying the value before and after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Where the mutation happened.
    pub location: Location,
    /// The value before the mutation.
    pub old: u64,
    /// The value after the mutation.
    pub new: u64,
}

/// A passive subscriber to [`ChangeEvent`]s.
///
/// Implementors must not call back into the mutating API of the Cell,
/// Register, or Memory that notified them from within `on_change`.
pub trait Observer: Send + Sync {
    /// Called synchronously, from within the mutation itself, after the new
    /// value has taken effect.
    fn on_change(&self, event: ChangeEvent);
}

/// A location's attached observers. Empty by default so unobserved
/// Cells/Registers pay nothing beyond an empty `Vec`.
#[derive(Default, Clone)]
pub struct Observers(Vec<Arc<dyn Observer>>);

impl Observers {
    /// Creates an empty observer list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer. Order of attachment is the order of notification.
    pub fn attach(&mut self, observer: Arc<dyn Observer>) {
        self.0.push(observer);
    }

    /// Notifies every attached observer of `event`, in attachment order.
    pub fn notify(&self, event: ChangeEvent) {
        for observer in &self.0 {
            observer.on_change(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.0.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<ChangeEvent>>);

    impl Observer for Recorder {
        fn on_change(&self, event: ChangeEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn notifies_in_attachment_order() {
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut observers = Observers::new();
        observers.attach(recorder.clone());

        observers.notify(ChangeEvent {
            location: Location::Pc,
            old: 0,
            new: 4,
        });

        let recorded = recorder.0.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].new, 4);
    }
}
