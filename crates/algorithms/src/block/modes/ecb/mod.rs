//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed on its own with the same key, so identical
//! plaintext blocks give identical ciphertext blocks. Blocks carry no
//! dependency on each other and may be processed in any order.

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockBuffer, BlockCipher};
use crate::error::Result;

/// ECB mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Creates a new ECB mode instance around `cipher`
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Encrypts every block in place
    pub fn encrypt_blocks(&self, blocks: &mut BlockBuffer) -> Result<()> {
        for block in blocks.blocks_mut() {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypts every block in place
    pub fn decrypt_blocks(&self, blocks: &mut BlockBuffer) -> Result<()> {
        for block in blocks.blocks_mut() {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }

    /// Encrypts a message that is already a whole number of blocks
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut blocks = BlockBuffer::from_slice(plaintext)?;
        self.encrypt_blocks(&mut blocks)?;
        Ok(blocks.merge())
    }

    /// Decrypts a message that is a whole number of blocks
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut blocks = BlockBuffer::from_slice(ciphertext)?;
        self.decrypt_blocks(&mut blocks)?;
        Ok(blocks.merge())
    }
}
