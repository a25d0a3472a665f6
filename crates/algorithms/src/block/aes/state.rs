//! Conversion between the linear block and the column-major state matrix
//!
//! A 16-byte block maps to the 4×4 state as `state[r][c] = block[r + 4c]`.
//! Round transformations only ever see [`State`]; padding, segmentation and
//! the mode drivers only ever see linear bytes.

use core::fmt;
use zeroize::Zeroize;

use rijndael_params::AES_BLOCK_SIZE;

/// One block in linear byte order
pub type Block = [u8; AES_BLOCK_SIZE];

/// The 4×4 byte matrix the round transformations operate on, indexed
/// `[row][column]`
#[derive(Clone, Copy, Default, PartialEq, Eq, Zeroize)]
pub struct State([[u8; 4]; 4]);

impl State {
    /// Lay out a linear block column by column
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (c, column) in block.chunks_exact(4).enumerate() {
            for (r, &byte) in column.iter().enumerate() {
                rows[r][c] = byte;
            }
        }
        State(rows)
    }

    /// Read the state back out column by column
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; AES_BLOCK_SIZE];
        for c in 0..4 {
            for r in 0..4 {
                block[r + 4 * c] = self.0[r][c];
            }
        }
        block
    }

    /// Byte at row `r`, column `c`
    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.0[r][c]
    }

    /// Row `r` as stored
    #[inline(always)]
    pub fn row(&self, r: usize) -> &[u8; 4] {
        &self.0[r]
    }

    #[inline(always)]
    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [u8; 4] {
        &mut self.0[r]
    }

    /// Column `c`, top to bottom
    #[inline(always)]
    pub fn column(&self, c: usize) -> [u8; 4] {
        [self.0[0][c], self.0[1][c], self.0[2][c], self.0[3][c]]
    }

    #[inline(always)]
    pub(crate) fn set_column(&mut self, c: usize, column: [u8; 4]) {
        for (r, byte) in column.into_iter().enumerate() {
            self.0[r][c] = byte;
        }
    }

    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.0.iter_mut().flat_map(|row| row.iter_mut())
    }
}

impl From<&Block> for State {
    fn from(block: &Block) -> Self {
        State::from_block(block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({})", hex::encode(self.to_block()))
    }
}
