//! The façade composing a [`Memory`] and a [`Processor`] (spec §4.4):
//! program loading, the input/output tail-pointer convention, and gating of
//! the clocked driver.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::driver::DriverHandle;
use crate::error::RegVmError;
use crate::memory::Memory;
use crate::params::Params;
use crate::processor::{Processor, Status};

/// The hex magic header every program image must begin with (spec §6.1).
pub const PROGRAM_HEADER: &str = "1f1f1f1f";

/// Default clock-tick period, in milliseconds, for a freshly constructed
/// [`Computer`]. Not specified by spec §4.4; chosen as a value slow enough
/// to be observed by a human watching single-stepped state.
pub const DEFAULT_CLOCK_TICK_MS: u64 = 200;

pub(crate) struct ComputerState {
    pub(crate) memory: Memory,
    pub(crate) processor: Processor,
    pub(crate) program: Option<String>,
    pub(crate) params: Params,
}

/// Owns one [`Memory`], one [`Processor`], a running flag, a clock-tick
/// period, the current program text, and at most one active clocked
/// driver.
pub struct Computer {
    pub(crate) state: Arc<Mutex<ComputerState>>,
    pub(crate) running: Arc<AtomicBool>,
    clock_tick_ms: Arc<AtomicU64>,
    driver: Option<DriverHandle>,
}

impl Computer {
    /// Creates a fresh, reset Computer with the given parameters.
    pub fn new(params: Params) -> Result<Self, RegVmError> {
        params.validate()?;
        let state = ComputerState {
            memory: Memory::new(&params),
            processor: Processor::new(params),
            program: None,
            params,
        };
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            running: Arc::new(AtomicBool::new(false)),
            clock_tick_ms: Arc::new(AtomicU64::new(DEFAULT_CLOCK_TICK_MS)),
            driver: None,
        })
    }

    /// Creates a Computer with the default [`Params`] (spec §3 defaults).
    pub fn with_defaults() -> Self {
        Self::new(Params::default()).expect("default params are always valid")
    }

    /// Current clock-tick period, in milliseconds.
    pub fn clock_tick_ms(&self) -> u64 {
        self.clock_tick_ms.load(Ordering::SeqCst)
    }

    /// Sets the clock-tick period. A running driver picks up the new value
    /// before its next sleep.
    pub fn set_clock_tick_ms(&self, ms: u64) {
        self.clock_tick_ms.store(ms, Ordering::SeqCst);
    }

    /// Whether the clocked driver is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// The processor's current status.
    pub fn status(&self) -> Status {
        self.state.lock().unwrap().processor.status()
    }

    /// Reads a general-purpose register.
    pub fn register(&self, index: usize) -> u64 {
        self.state.lock().unwrap().processor.register(index)
    }

    /// The program counter.
    pub fn pc(&self) -> u64 {
        self.state.lock().unwrap().processor.pc()
    }

    /// Sets the current program image. `image` must begin with
    /// [`PROGRAM_HEADER`]; the remainder must fit within memory capacity.
    pub fn set_program(&self, image: &str) -> Result<(), RegVmError> {
        let body = image
            .strip_prefix(PROGRAM_HEADER)
            .ok_or(RegVmError::WrongProgramFormat)?;

        let mut state = self.state.lock().unwrap();
        let max = state.params.max_program_hex_len();
        if body.len() > max {
            return Err(RegVmError::ProgramTooLarge {
                len: body.len(),
                max,
            });
        }
        Memory::validate_hex(body)?;
        info!("program set: {} hex digits", body.len());
        state.program = Some(body.to_string());
        Ok(())
    }

    /// `stop()`, then resets the processor, clears memory, and loads the
    /// current program image at address 0 (if one is set).
    pub fn reset(&mut self) {
        self.stop();
        let mut state = self.state.lock().unwrap();
        state.processor.reset();
        state.memory.clear();
        if let Some(program) = state.program.clone() {
            state
                .memory
                .load(0, &program)
                .expect("program was validated as hex by set_program");
        }
    }

    /// Writes `input` as high in memory as possible, followed by a two-hex-digit
    /// pointer to its start address (spec §4.4 tail-pointer convention).
    pub fn load_input(&self, input: &str) -> Result<(), RegVmError> {
        let mut state = self.state.lock().unwrap();
        let program_len = state.program.as_ref().ok_or(RegVmError::NoProgram)?.len();
        Memory::validate_hex(input)?;

        let max = state.params.max_program_hex_len();
        if program_len + input.len() + 2 > max {
            return Err(RegVmError::InputTooLarge {
                len: program_len + input.len() + 2,
                max,
            });
        }

        let address = state.memory.len() - input.len() - 2;
        state.memory.load(address, input)?;
        let pointer = format!("{:02x}", address);
        let pointer_address = state.memory.len() - 2;
        state.memory.load(pointer_address, &pointer)?;
        Ok(())
    }

    /// Reads output back through the tail pointer written by [`Self::load_input`].
    pub fn read_output(&self) -> String {
        let state = self.state.lock().unwrap();
        let len = state.memory.len();
        let pointer = ((state.memory.get(len - 2) << 4) | state.memory.get(len - 1)) as usize;
        let pointer = pointer.min(len - 2);
        state.memory.read(pointer, len - 2)
    }

    /// `reset()`, `loadInput(input)`, `stepThrough()`, then returns
    /// [`Self::read_output`].
    pub fn execute(&mut self, input: &str) -> Result<String, RegVmError> {
        self.reset();
        self.load_input(input)?;
        self.step_through();
        Ok(self.read_output())
    }

    /// Repeatedly steps the processor while its status is `Success`.
    pub fn step_through(&mut self) {
        loop {
            let status = {
                let mut state = self.state.lock().unwrap();
                state.processor.step(&mut state.memory);
                state.processor.status()
            };
            if status != Status::Success {
                break;
            }
        }
    }

    /// Performs a single fetch-or-execute half-step.
    pub fn step(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.processor.step(&mut state.memory);
    }

    /// For each line of `input`, writes `execute(line)` as one output line.
    /// Stops at the first execution error, which is returned to the caller.
    pub fn execute_stream<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), RegVmError> {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let result = self.execute(&line)?;
            writeln!(output, "{}", result).ok();
        }
        Ok(())
    }

    /// Starts the clocked driver if it is not already running. A no-op
    /// otherwise.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("clocked driver starting");
        self.driver = Some(DriverHandle::spawn(
            Arc::clone(&self.state),
            Arc::clone(&self.running),
            Arc::clone(&self.clock_tick_ms),
        ));
    }

    /// Stops the clocked driver if it is running, blocking until its task
    /// exits. A no-op otherwise.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(driver) = self.driver.take() {
            driver.join();
        }
        let mut state = self.state.lock().unwrap();
        if state.processor.status() == Status::Success {
            warn!("clocked driver interrupted mid-run");
            state.processor.interrupt();
        }
        info!("clocked driver stopped");
    }

    /// Stops the driver if running, otherwise starts it.
    pub fn start_stop(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }
}

impl Drop for Computer {
    fn drop(&mut self) {
        self.stop();
    }
}
