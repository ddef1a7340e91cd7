//! The clocked execution driver (spec §4.5): a cooperative background task
//! that repeatedly steps a [`Computer`](crate::computer::Computer), sleeping
//! one tick after each completed *execute* half-step, until the processor
//! halts or `running` is cleared.
//!
//! Grounded on the `thread::sleep`-per-frame clocked loop used by
//! `other_examples/e70c1bc4_giuseppearici-chip8…processor.rs` — a plain
//! `std::thread` plus a shared atomic flag is the idiom this pack reaches
//! for, not an async runtime, for a single-core cooperative tick loop like
//! this one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

use crate::computer::ComputerState;
use crate::processor::{NextMove, Status};

/// A running clocked driver. Dropped implicitly by
/// [`crate::computer::Computer::stop`], which calls [`Self::join`].
pub(crate) struct DriverHandle {
    join_handle: JoinHandle<()>,
}

impl DriverHandle {
    /// Spawns the driver thread. `running` is shared with the owning
    /// [`crate::computer::Computer`]; clearing it asks the loop to stop.
    pub(crate) fn spawn(
        state: Arc<Mutex<ComputerState>>,
        running: Arc<AtomicBool>,
        clock_tick_ms: Arc<AtomicU64>,
    ) -> Self {
        let join_handle = thread::spawn(move || {
            loop {
                if !running.load(Ordering::SeqCst) {
                    break;
                }

                let (status, next_move) = {
                    let mut state = state.lock().unwrap();
                    state.processor.step(&mut state.memory);
                    (state.processor.status(), state.processor.next_move())
                };

                if status != Status::Success {
                    debug!("clocked driver stopping: status={:?}", status);
                    break;
                }

                if next_move == NextMove::Fetch {
                    // We just completed an execute half-step.
                    let tick = clock_tick_ms.load(Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(tick));
                }
            }
            running.store(false, Ordering::SeqCst);
        });

        Self { join_handle }
    }

    /// Waits for the driver thread to finish. A panicked driver thread is
    /// treated as a silently ignored cancellation, per spec §4.5.
    pub(crate) fn join(self) {
        let _ = self.join_handle.join();
    }
}
