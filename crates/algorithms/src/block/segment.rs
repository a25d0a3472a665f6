//! Splitting a padded buffer into blocks and joining blocks back together
//!
//! Blocks live in one contiguous allocation and are viewed with a fixed
//! stride, so there is exactly one owner for all of them.

use alloc::vec::Vec;
use core::slice::{ChunksExact, ChunksExactMut};

use rijndael_api::{Error, Result};
use rijndael_params::AES_BLOCK_SIZE;

/// A run of whole 16-byte blocks in one owned buffer
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BlockBuffer {
    data: Vec<u8>,
}

impl BlockBuffer {
    /// Take ownership of `padded`, which must hold a whole number of blocks
    ///
    /// An empty buffer is zero blocks.
    pub fn split(padded: Vec<u8>) -> Result<Self> {
        if padded.len() % AES_BLOCK_SIZE != 0 {
            return Err(Error::InvalidInputLength {
                context: "block segmentation",
                block_size: AES_BLOCK_SIZE,
                actual: padded.len(),
            });
        }
        Ok(Self { data: padded })
    }

    /// Copy `bytes` into a new buffer; same length rule as [`split`](Self::split)
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::split(bytes.to_vec())
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.data.len() / AES_BLOCK_SIZE
    }

    /// Total length in bytes
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// True when there are no blocks
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Block `index`, if present
    pub fn block(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(AES_BLOCK_SIZE)?;
        self.data.get(start..start + AES_BLOCK_SIZE)
    }

    /// Blocks in order
    pub fn blocks(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(AES_BLOCK_SIZE)
    }

    /// Mutable blocks in order; each can be processed independently
    pub fn blocks_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(AES_BLOCK_SIZE)
    }

    /// All blocks as one linear slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Concatenate the blocks back into a linear buffer
    pub fn merge(self) -> Vec<u8> {
        self.data
    }
}

impl From<BlockBuffer> for Vec<u8> {
    fn from(buffer: BlockBuffer) -> Self {
        buffer.merge()
    }
}

impl AsRef<[u8]> for BlockBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl core::fmt::Debug for BlockBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BlockBuffer({} blocks)", self.block_count())
    }
}
