//! Key and IV generation
//!
//! Everything here draws from the OS entropy source through [`OsRng`]
//! unless an RNG is passed explicitly. A failing source is reported as
//! `RandomGeneration`; there is no fallback.

use alloc::vec;
use alloc::vec::Vec;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use rijndael_api::{SecretKey, Variant};
use rijndael_params::AES_IV_SIZE;

use crate::error::{Error, Result};

/// `n` bytes from the OS entropy source
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; n];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::random("random bytes", &e))?;
    Ok(bytes)
}

/// A fresh key for `variant` from the OS entropy source
pub fn generate_key(variant: Variant) -> Result<SecretKey> {
    generate_key_with(variant, &mut OsRng)
}

/// A fresh key for `variant` from `rng`
pub fn generate_key_with<R: RngCore + CryptoRng>(variant: Variant, rng: &mut R) -> Result<SecretKey> {
    SecretKey::random(variant, rng)
}

/// A fresh 16-byte IV from the OS entropy source
pub fn generate_iv() -> Result<[u8; AES_IV_SIZE]> {
    generate_iv_with(&mut OsRng)
}

/// A fresh 16-byte IV from `rng`
pub fn generate_iv_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; AES_IV_SIZE]> {
    let mut iv = [0u8; AES_IV_SIZE];
    rng.try_fill_bytes(&mut iv)
        .map_err(|e| Error::random("IV generation", &e))?;
    Ok(iv)
}
