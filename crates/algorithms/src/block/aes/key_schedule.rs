//! AES key expansion
//!
//! Expands a 16/24/32-byte key into `4 * (rounds + 1)` 32-bit words. The
//! first Nk words are the key itself, packed big-endian; every later word
//! is `w[i - Nk] ^ T` where T depends on the position of `i` within the key
//! length.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_api::{Result, Variant};
use rijndael_internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use rijndael_params::{AES_BLOCK_SIZE, AES_MAX_SCHEDULE_WORDS, AES_NB};

use super::sbox::sub_byte;
use super::state::Block;

/// Round constants for AES key expansion, indexed by `i / Nk`
///
/// Only the high byte is ever non-zero: successive doublings of {01} in
/// GF(2⁸). Index 0 is never used.
pub const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000,
    0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Rotates a word left by one byte
#[inline(always)]
pub fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Applies the forward S-box to each byte of a word
#[inline(always)]
pub fn sub_word(word: u32) -> u32 {
    let bytes = u32_to_be_bytes(word);
    u32::from_be_bytes([
        sub_byte(bytes[0]),
        sub_byte(bytes[1]),
        sub_byte(bytes[2]),
        sub_byte(bytes[3]),
    ])
}

/// Expanded key: one 4-word round key per round plus the initial one
///
/// Derived once per operation, read-only afterwards, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeySchedule {
    #[zeroize(skip)]
    variant: Variant,
    words: [u32; AES_MAX_SCHEDULE_WORDS],
}

impl RoundKeySchedule {
    /// Expand `key` for `variant`
    ///
    /// Fails only with `InvalidKeyLength` when the key does not have the
    /// variant's length.
    pub fn expand(key: &[u8], variant: Variant) -> Result<Self> {
        variant.check_key(key)?;

        let nk = variant.nk();
        let total = variant.schedule_words();
        let mut words = [0u32; AES_MAX_SCHEDULE_WORDS];

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = u32_from_be_bytes(chunk);
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                // only the eight-word key gets this extra substitution
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        Ok(Self { variant, words })
    }

    /// The variant this schedule was derived for
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of rounds
    pub fn rounds(&self) -> usize {
        self.variant.rounds()
    }

    /// Every word of the schedule, `4 * (rounds + 1)` in total
    pub fn words(&self) -> &[u32] {
        &self.words[..self.variant.schedule_words()]
    }

    /// Words `[4r, 4r + 4)`
    ///
    /// Panics if `round > rounds()`.
    pub fn round_key(&self, round: usize) -> &[u32] {
        assert!(round <= self.rounds(), "round {} out of range", round);
        &self.words[AES_NB * round..AES_NB * (round + 1)]
    }

    /// Round key `round` as 16 bytes, each word big-endian
    pub fn round_key_bytes(&self, round: usize) -> Block {
        let mut bytes = [0u8; AES_BLOCK_SIZE];
        for (dst, word) in bytes.chunks_exact_mut(4).zip(self.round_key(round)) {
            dst.copy_from_slice(&u32_to_be_bytes(*word));
        }
        bytes
    }
}

impl fmt::Debug for RoundKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundKeySchedule<{}>([REDACTED])", self.variant)
    }
}
