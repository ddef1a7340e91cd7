//! Fixed-length, address-wrapping memory of [`Cell`]s (spec §4.2).

use log::debug;

use crate::cell::Cell;
use crate::error::RegVmError;
use crate::hex::{block_to_hex_digit, blocks_from_hex, digit_value};
use crate::observer::{Location, Observer};
use crate::params::Params;
use std::sync::Arc;

/// A fixed-length array of [`Cell`]s with address arithmetic modulo its
/// length, plus the hexadecimal load/read helpers the program loader and
/// I/O convention (spec §4.4, §6) build on.
#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<Cell>,
    block_size: u32,
    hex_size: u32,
}

impl Memory {
    /// Creates a new, zeroed memory of `params.memory_cells` cells, each
    /// `params.block_size` bits wide.
    pub fn new(params: &Params) -> Self {
        Self {
            cells: (0..params.memory_cells)
                .map(|_| Cell::new(params.block_size))
                .collect(),
            block_size: params.block_size,
            hex_size: params.hex_size(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this memory has zero cells. Never true for a validly
    /// constructed [`Params`], but kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn wrap(&self, p: usize) -> usize {
        p % self.cells.len()
    }

    /// Returns the block at index `p mod len`.
    pub fn get(&self, p: usize) -> u64 {
        self.cells[self.wrap(p)].get()
    }

    /// Writes the low `block_size` bits of `block` to cell `p mod len`.
    pub fn set(&mut self, p: usize, block: u64) {
        let index = self.wrap(p);
        self.cells[index].set_at(block, Location::Cell(index));
    }

    /// Attaches an observer to the cell at `p mod len`.
    pub fn attach(&mut self, p: usize, observer: Arc<dyn Observer>) {
        let index = self.wrap(p);
        self.cells[index].attach(observer);
    }

    /// Sets every cell to zero.
    pub fn clear(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            cell.set_at(0, Location::Cell(index));
        }
    }

    /// Loads `hex` (a string of hex digits whose length is a multiple of
    /// `hex_size`) as consecutive blocks starting at address `p`, each group
    /// of `hex_size` digits read big-endian (most-significant digit first).
    ///
    /// `hex.len()` not being a multiple of `hex_size` is a programmer error
    /// (spec §4.2) and is asserted against rather than reported.
    pub fn load(&mut self, p: usize, hex: &str) -> Result<(), RegVmError> {
        assert_eq!(
            hex.len() % self.hex_size as usize,
            0,
            "hex length must be a multiple of hex_size"
        );
        let blocks = blocks_from_hex(hex, self.hex_size)?;
        debug!("loading {} blocks at address {}", blocks.len(), p);
        for (offset, block) in blocks.into_iter().enumerate() {
            self.set(p + offset, block);
        }
        Ok(())
    }

    /// Reads blocks from address `p` (inclusive) to `q` (exclusive), both
    /// reduced mod `len`, scanning forward (wrap-around permitted), emitting
    /// each block as *one* hex digit regardless of `block_size` — preserving
    /// the source's `%x`-per-block emission (spec §4.2, §9 open question;
    /// see DESIGN.md).
    pub fn read(&self, p: usize, q: usize) -> String {
        let p = self.wrap(p);
        let q = self.wrap(q);
        let count = if q >= p {
            q - p
        } else {
            self.cells.len() - p + q
        };
        (0..count)
            .map(|offset| block_to_hex_digit(self.get(p + offset)))
            .collect()
    }

    /// Validates that `hex` contains only hex digits, without decoding it.
    pub fn validate_hex(hex: &str) -> Result<(), RegVmError> {
        for c in hex.chars() {
            digit_value(c)?;
        }
        Ok(())
    }

    /// Bits per cell.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }
}
