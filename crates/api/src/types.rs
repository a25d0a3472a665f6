//! Core types describing a cipher configuration
//!
//! [`Variant`] fixes the key size and round count, [`Mode`] the chaining
//! discipline. Neither is ever mixed within one operation.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_internal::constant_time::ct_eq;
use rijndael_params::{
    AES128_KEY_SIZE, AES128_NK, AES128_ROUNDS, AES192_KEY_SIZE, AES192_NK, AES192_ROUNDS,
    AES256_KEY_SIZE, AES256_NK, AES256_ROUNDS, AES_NB,
};

use crate::error::{validate, Error, Result};

/// AES key size selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// 128-bit key, 10 rounds
    Aes128,
    /// 192-bit key, 12 rounds
    Aes192,
    /// 256-bit key, 14 rounds
    Aes256,
}

impl Variant {
    /// All variants in ascending key size
    pub const ALL: [Variant; 3] = [Variant::Aes128, Variant::Aes192, Variant::Aes256];

    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            Variant::Aes128 => AES128_KEY_SIZE,
            Variant::Aes192 => AES192_KEY_SIZE,
            Variant::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in 32-bit words (Nk)
    pub const fn nk(self) -> usize {
        match self {
            Variant::Aes128 => AES128_NK,
            Variant::Aes192 => AES192_NK,
            Variant::Aes256 => AES256_NK,
        }
    }

    /// Number of rounds (Nr)
    pub const fn rounds(self) -> usize {
        match self {
            Variant::Aes128 => AES128_ROUNDS,
            Variant::Aes192 => AES192_ROUNDS,
            Variant::Aes256 => AES256_ROUNDS,
        }
    }

    /// Expanded key length in 32-bit words: Nb * (Nr + 1)
    pub const fn schedule_words(self) -> usize {
        AES_NB * (self.rounds() + 1)
    }

    /// Key size in bits
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Aes128 => "AES-128",
            Variant::Aes192 => "AES-192",
            Variant::Aes256 => "AES-256",
        }
    }

    /// Check that `key` has exactly the length this variant requires
    pub fn check_key(self, key: &[u8]) -> Result<()> {
        if key.len() != self.key_len() {
            return Err(Error::InvalidKeyLength {
                variant: self,
                expected: self.key_len(),
                actual: key.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts `128`, `aes128`, `AES-128` and the like
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bits = trimmed
            .strip_prefix("AES-")
            .or_else(|| trimmed.strip_prefix("aes-"))
            .or_else(|| trimmed.strip_prefix("AES"))
            .or_else(|| trimmed.strip_prefix("aes"))
            .unwrap_or(trimmed);
        let bits = bits.parse::<usize>().unwrap_or(0);
        Variant::ALL
            .into_iter()
            .find(|variant| variant.bits() == bits)
            .ok_or_else(|| Error::param("variant", "expected one of 128, 192, 256"))
    }
}

/// Block chaining mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Electronic Codebook: every block is transformed independently
    Ecb,
    /// Cipher Block Chaining: each plaintext block is XORed with the
    /// previous ciphertext block (or the IV) before encryption
    Cbc,
}

impl Mode {
    /// Whether the mode needs an initialization vector
    pub const fn requires_iv(self) -> bool {
        matches!(self, Mode::Cbc)
    }

    /// Mode name
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let ecb = s.eq_ignore_ascii_case("ecb");
        validate::parameter(ecb || s.eq_ignore_ascii_case("cbc"), "mode", "expected ECB or CBC")?;
        Ok(if ecb { Mode::Ecb } else { Mode::Cbc })
    }
}

/// AES key material, zeroized on drop
///
/// The length is always one of 16, 24 or 32 bytes and matches
/// [`SecretKey::variant`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    #[zeroize(skip)]
    variant: Variant,
    data: Vec<u8>,
}

impl SecretKey {
    /// Wrap existing key bytes, checking them against `variant`
    pub fn from_slice(variant: Variant, key: &[u8]) -> Result<Self> {
        variant.check_key(key)?;
        Ok(Self {
            variant,
            data: key.to_vec(),
        })
    }

    /// Fill a new key for `variant` from `rng`
    pub fn random<R: RngCore + CryptoRng>(variant: Variant, rng: &mut R) -> Result<Self> {
        let mut data = alloc::vec![0u8; variant.key_len()];
        rng.try_fill_bytes(&mut data)
            .map_err(|e| Error::random("key generation", &e))?;
        Ok(Self { variant, data })
    }

    /// The variant this key belongs to
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; keys are never empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey<{}>([REDACTED])", self.variant)
    }
}
