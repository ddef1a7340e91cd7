//! Error kinds surfaced at the [`crate::computer::Computer`] boundary (spec §7).
//!
//! Processor-level failures (bad instruction, bad alignment, halt) are
//! *not* represented here — they are reflected in the status register
//! (see [`crate::processor::Status`]) and never propagated as [`RegVmError`].

use thiserror::Error;

/// Errors returned by the library surface. File-level errors
/// (`IoRead`/`IoOpen`/`IoNotFound`) are a collaborator boundary concern and
/// live only in the CLI binary, not in this crate's library API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegVmError {
    /// Construction parameters violate one of spec §3's invariants.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A program image did not start with the `1f1f1f1f` magic header.
    #[error("program image is missing the 1f1f1f1f magic header")]
    WrongProgramFormat,

    /// The program body (after stripping the header) exceeds memory capacity.
    #[error("program body exceeds memory capacity ({len} hex digits > {max} max)")]
    ProgramTooLarge {
        /// Length of the offending program body, in hex digits.
        len: usize,
        /// Maximum allowed length, in hex digits.
        max: usize,
    },

    /// Program, input, and the two-digit tail pointer together would overflow memory.
    #[error("program plus input plus pointer exceeds memory capacity ({len} hex digits > {max} max)")]
    InputTooLarge {
        /// Combined length, in hex digits.
        len: usize,
        /// Maximum allowed length, in hex digits.
        max: usize,
    },

    /// `loadInput` was called before `setProgram`.
    #[error("no program has been loaded")]
    NoProgram,

    /// A non-hex-digit character was encountered while decoding a hex string.
    #[error("invalid hex character {0:?}")]
    BadHexChar(char),
}
