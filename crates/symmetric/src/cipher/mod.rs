//! Validated cipher configuration and the message-level pipeline
//!
//! Encryption: pad, split into blocks, run the mode driver, merge.
//! Decryption: check the length, split, run the mode driver, merge, unpad.
//! A [`Cipher`] expands its key once and can be reused for any number of
//! messages.

use alloc::vec::Vec;
use core::fmt;
use tracing::debug;
use zeroize::Zeroize;

use rijndael_algorithms::block::{Aes, BlockBuffer, Cbc, Ecb};
use rijndael_algorithms::padding;
use rijndael_api::{Mode, SecretKey, Variant};
use rijndael_params::{AES_BLOCK_SIZE, AES_IV_SIZE};

use crate::error::{validate, Error, Result};

#[derive(Clone)]
enum Engine {
    Ecb(Ecb<Aes>),
    Cbc(Cbc<Aes>),
}

/// An AES variant and mode bound to a key (and IV, for CBC)
///
/// Construction does all configuration checks, so a `Cipher` that exists
/// can always process a well-formed message.
#[derive(Clone)]
pub struct Cipher {
    variant: Variant,
    mode: Mode,
    engine: Engine,
}

impl Cipher {
    /// Validate the configuration and expand the key
    ///
    /// Fails with `InvalidKeyLength` if `key` does not fit `variant`,
    /// `MissingIv` if `mode` is CBC and `iv` is `None`, and `InvalidLength`
    /// if the IV is not 16 bytes. An IV passed for ECB is ignored.
    pub fn new(variant: Variant, mode: Mode, key: &[u8], iv: Option<&[u8]>) -> Result<Self> {
        let aes = Aes::new(variant, key)?;

        let engine = match mode {
            Mode::Ecb => Engine::Ecb(Ecb::new(aes)),
            Mode::Cbc => {
                let iv = iv.ok_or(Error::MissingIv { mode })?;
                Engine::Cbc(Cbc::new(aes, iv)?)
            }
        };

        debug!(%variant, %mode, "cipher configured");
        Ok(Self {
            variant,
            mode,
            engine,
        })
    }

    /// Same as [`new`](Self::new), taking the variant from `key`
    pub fn with_key(key: &SecretKey, mode: Mode, iv: Option<&[u8]>) -> Result<Self> {
        Self::new(key.variant(), mode, key.as_ref(), iv)
    }

    /// The configured key size
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The configured mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The IV in use, for CBC
    pub fn iv(&self) -> Option<&[u8; AES_IV_SIZE]> {
        match &self.engine {
            Engine::Ecb(_) => None,
            Engine::Cbc(cbc) => Some(cbc.iv()),
        }
    }

    /// Encrypt whole blocks in place, without padding
    pub fn encrypt_blocks(&self, blocks: &mut BlockBuffer) -> Result<()> {
        match &self.engine {
            Engine::Ecb(ecb) => ecb.encrypt_blocks(blocks),
            Engine::Cbc(cbc) => cbc.encrypt_blocks(blocks),
        }
    }

    /// Decrypt whole blocks in place, without unpadding
    pub fn decrypt_blocks(&self, blocks: &mut BlockBuffer) -> Result<()> {
        match &self.engine {
            Engine::Ecb(ecb) => ecb.decrypt_blocks(blocks),
            Engine::Cbc(cbc) => cbc.decrypt_blocks(blocks),
        }
    }

    /// Pad and encrypt `message`
    ///
    /// The output is always a whole number of blocks and at least one block
    /// longer than `message` rounded down.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut blocks = BlockBuffer::split(padding::pad(message))?;
        self.encrypt_blocks(&mut blocks)?;

        debug!(
            variant = %self.variant,
            mode = %self.mode,
            plaintext_len = message.len(),
            ciphertext_len = blocks.byte_len(),
            "encrypted message"
        );
        Ok(blocks.merge())
    }

    /// Decrypt `ciphertext` and strip its padding
    ///
    /// `ciphertext` must be a non-empty multiple of 16 bytes. Bad padding
    /// after decryption is `InvalidPadding`; no partial plaintext is
    /// returned in that case.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::whole_blocks("ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut blocks = BlockBuffer::from_slice(ciphertext)?;
        self.decrypt_blocks(&mut blocks)?;

        let mut plaintext = blocks.merge();
        if let Err(err) = padding::unpad_in_place(&mut plaintext) {
            plaintext.zeroize();
            debug!(variant = %self.variant, mode = %self.mode, "padding rejected");
            return Err(err);
        }

        debug!(
            variant = %self.variant,
            mode = %self.mode,
            ciphertext_len = ciphertext.len(),
            plaintext_len = plaintext.len(),
            "decrypted message"
        );
        Ok(plaintext)
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("variant", &self.variant)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Encrypt `message` in one call
///
/// `iv` is required for CBC and ignored for ECB.
pub fn encrypt(
    message: &[u8],
    variant: Variant,
    mode: Mode,
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<Vec<u8>> {
    Cipher::new(variant, mode, key, iv)?.encrypt(message)
}

/// Decrypt `ciphertext` in one call
///
/// `iv` is required for CBC and ignored for ECB.
pub fn decrypt(
    ciphertext: &[u8],
    variant: Variant,
    mode: Mode,
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<Vec<u8>> {
    Cipher::new(variant, mode, key, iv)?.decrypt(ciphertext)
}
