//! Block and state representation.

use core::fmt;

use crate::error::{AesError, Result};

/// Block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// Copies a slice into a block, rejecting anything but 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    Block::try_from(bytes).map_err(|_| AesError::InvalidBlockLength(bytes.len()))
}

/// The 4x4 byte matrix a block is transformed in.
///
/// Input byte `i` lands at row `i % 4`, column `i / 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    rows: [[u8; 4]; 4],
}

impl State {
    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, byte) in block.iter().enumerate() {
            rows[i % 4][i / 4] = *byte;
        }
        Self { rows }
    }

    /// Stores the state back into a block, column by column.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_LEN];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.rows[i % 4][i / 4];
        }
        block
    }

    /// Byte at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// One row of the state.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; 4] {
        self.rows[row]
    }

    /// One column of the state, top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    #[inline]
    pub(crate) fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.rows[row][col] = byte;
        }
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut [[u8; 4]; 4] {
        &mut self.rows
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.rows.iter_mut().flatten()
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:02x} {:02x} {:02x} {:02x}",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}
