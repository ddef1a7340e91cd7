//! The parameterised bit-width model (spec §3): the handful of numbers that
//! fix memory layout, instruction encoding, and register truncation for a
//! [`crate::computer::Computer`] for its whole lifetime.

use serde::{Deserialize, Serialize};

use crate::error::RegVmError;

/// Number of opcode blocks in an instruction. Fixed by the encoding in
/// spec §6.2 (one opcode block, always).
pub const OPBLOCKS: u32 = 1;

/// Construction parameters for a register machine.
///
/// All fields are immutable once a [`Params`] is validated and handed to a
/// [`crate::computer::Computer`]. Defaults match spec §3: `BLOCKSIZE=4`,
/// `MEMORYCELLS=256`, `WORDBLOCKS=2`, `NOREGISTERS=16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Bits per memory cell / per opcode block. Must be a positive multiple of 4.
    pub block_size: u32,
    /// Number of cells in memory.
    pub memory_cells: usize,
    /// Blocks per word (general-purpose register width, in blocks).
    pub word_blocks: u32,
    /// Number of general-purpose registers. Must fit in one block, i.e. `<= 2^block_size`.
    pub no_registers: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            block_size: 4,
            memory_cells: 256,
            word_blocks: 2,
            no_registers: 16,
        }
    }
}

impl Params {
    /// Bits per word: `word_blocks * block_size`.
    pub fn word_size(&self) -> u32 {
        self.word_blocks * self.block_size
    }

    /// Bits in one opcode block. Equal to `block_size` by definition (spec §3).
    pub fn op_size(&self) -> u32 {
        self.block_size
    }

    /// Blocks in one instruction: opcode block + register-index block + word.
    pub fn instruction_blocks(&self) -> u32 {
        OPBLOCKS + 1 + self.word_blocks
    }

    /// Hex digits per block (`block_size / 4`).
    pub fn hex_size(&self) -> u32 {
        self.block_size / 4
    }

    /// `2^block_size`, the exclusive upper bound on a cell value.
    pub fn block_modulus(&self) -> u64 {
        1u64 << self.block_size
    }

    /// `2^word_size`, the exclusive upper bound on a word value.
    pub fn word_modulus(&self) -> u64 {
        1u64 << self.word_size()
    }

    /// Maximum hex digits a program body may occupy: `memory_cells * block_size / 4`.
    pub fn max_program_hex_len(&self) -> usize {
        self.memory_cells * self.block_size as usize / 4
    }

    /// Validates every invariant in spec §3. Call this once, at construction.
    pub fn validate(&self) -> Result<(), RegVmError> {
        if self.block_size == 0 || self.block_size % 4 != 0 {
            return Err(RegVmError::InvalidParams(
                "block_size must be a positive multiple of 4".into(),
            ));
        }
        if self.memory_cells == 0 {
            return Err(RegVmError::InvalidParams(
                "memory_cells must be positive".into(),
            ));
        }
        if self.word_blocks == 0 {
            return Err(RegVmError::InvalidParams(
                "word_blocks must be positive".into(),
            ));
        }
        if self.no_registers == 0 {
            return Err(RegVmError::InvalidParams(
                "no_registers must be positive".into(),
            ));
        }
        if (self.no_registers as u64) > self.block_modulus() {
            return Err(RegVmError::InvalidParams(
                "no_registers must fit in a single block (no_registers <= 2^block_size)".into(),
            ));
        }
        if (self.memory_cells as u64) > self.word_modulus() {
            return Err(RegVmError::InvalidParams(
                "memory_cells must be addressable by a word (memory_cells <= 2^word_size)".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let p = Params::default();
        assert_eq!(p.word_size(), 8);
        assert_eq!(p.op_size(), 4);
        assert_eq!(p.instruction_blocks(), 4);
        assert_eq!(p.hex_size(), 1);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_block_size_not_multiple_of_four() {
        let p = Params {
            block_size: 5,
            ..Params::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_too_many_registers_for_block_size() {
        let p = Params {
            block_size: 4,
            no_registers: 17,
            ..Params::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_memory_cells_not_addressable_by_word() {
        let p = Params {
            block_size: 4,
            word_blocks: 1,
            memory_cells: 17,
            ..Params::default()
        };
        // word_size = 4, word_modulus = 16, memory_cells=17 exceeds it.
        assert!(p.validate().is_err());
    }
}
