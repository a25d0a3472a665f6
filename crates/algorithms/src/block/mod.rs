//! Block cipher, segmentation and modes of operation
//!
//! ```
//! use rijndael_algorithms::block::{Aes, BlockBuffer, BlockCipher};
//! use rijndael_algorithms::block::modes::Cbc;
//! use rijndael_api::Variant;
//!
//! let cipher = Aes::new(Variant::Aes128, &[0x2b; 16]).unwrap();
//! let cbc = Cbc::new(cipher, &[0u8; 16]).unwrap();
//!
//! let mut blocks = BlockBuffer::from_slice(b"exactly thirty-two bytes of text").unwrap();
//! cbc.encrypt_blocks(&mut blocks).unwrap();
//! cbc.decrypt_blocks(&mut blocks).unwrap();
//! assert_eq!(blocks.as_bytes(), b"exactly thirty-two bytes of text");
//! ```

use rijndael_api::Result;
use rijndael_params::AES_BLOCK_SIZE;

pub mod aes;
pub mod modes;
pub mod segment;

// Re-exports
pub use aes::{Aes, Block, RoundKeySchedule, State};
pub use modes::{cbc::Cbc, ecb::Ecb};
pub use segment::BlockBuffer;

/// A keyed permutation on fixed-size blocks
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size in bytes
    fn block_size() -> usize
    where
        Self: Sized,
    {
        Self::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name(&self) -> &'static str;
}
