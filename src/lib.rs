//! A tiny, parameterised register machine: a byte-addressable memory, a
//! fetch/execute processor, and a clocked driver that single-steps the
//! processor at a configurable rate.
//!
//! The crate is organised bottom-up, the way its own data flows:
//! [`cell`] and [`register`] are the width-truncated storage primitives;
//! [`memory`] is a fixed array of cells with wraparound addressing and hex
//! load/read helpers; [`processor`] is the fetch/execute engine over a
//! memory; [`computer`] is the façade that owns a memory and a processor
//! and exposes `step`/`reset`/`execute`; [`driver`] is the background task
//! that repeatedly steps a computer on a clock tick.

pub mod cell;
pub mod computer;
mod driver;
pub mod error;
pub mod hex;
pub mod memory;
pub mod observer;
pub mod params;
pub mod processor;
pub mod register;

pub use computer::{Computer, PROGRAM_HEADER};
pub use error::RegVmError;
pub use params::Params;
pub use processor::{NextMove, Opcode, Status};
