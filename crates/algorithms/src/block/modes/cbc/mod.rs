//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector.
//! Encryption is therefore strictly sequential.
//!
//! Decryption runs in two passes. First the inverse block transform is
//! applied to every ciphertext block; these are independent of each other.
//! Then each result is XORed with the ciphertext block before it (the IV for
//! block 0), which only needs the original ciphertext kept aside.

use alloc::vec::Vec;
use core::iter;
use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_internal::constant_time::ct_xor_in_place;
use rijndael_params::{AES_BLOCK_SIZE, AES_IV_SIZE};

use super::super::{BlockBuffer, BlockCipher};
use crate::error::{validate, Result};

/// CBC mode over a block cipher with a fixed IV
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: [u8; AES_IV_SIZE],
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), AES_IV_SIZE)?;

        let mut stored = [0u8; AES_IV_SIZE];
        stored.copy_from_slice(iv);
        Ok(Self { cipher, iv: stored })
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// The initialization vector
    pub fn iv(&self) -> &[u8; AES_IV_SIZE] {
        &self.iv
    }

    /// Encrypts every block in place, chaining from the IV
    pub fn encrypt_blocks(&self, blocks: &mut BlockBuffer) -> Result<()> {
        let mut prev = self.iv;
        for block in blocks.blocks_mut() {
            ct_xor_in_place(block, &prev);
            self.cipher.encrypt_block(block)?;
            prev.copy_from_slice(block);
        }
        Ok(())
    }

    /// Decrypts every block in place
    pub fn decrypt_blocks(&self, blocks: &mut BlockBuffer) -> Result<()> {
        let chain = blocks.as_bytes().to_vec();

        for block in blocks.blocks_mut() {
            self.cipher.decrypt_block(block)?;
        }

        let previous = iter::once(&self.iv[..]).chain(chain.chunks_exact(AES_BLOCK_SIZE));
        for (block, prev) in blocks.blocks_mut().zip(previous) {
            ct_xor_in_place(block, prev);
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
