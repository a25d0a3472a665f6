//! # rijndael
//!
//! A software-only implementation of the AES block cipher (FIPS-197) for
//! 128, 192 and 256-bit keys, with PKCS#7 padding and ECB/CBC modes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rijndael = "0.3"
//! ```
//!
//! ```
//! use rijndael::prelude::*;
//!
//! let key = rijndael::generate_key(Variant::Aes128).unwrap();
//! let iv = rijndael::generate_iv().unwrap();
//! let cipher = Cipher::with_key(&key, Mode::Cbc, Some(&iv[..])).unwrap();
//!
//! let ciphertext = cipher.encrypt(b"attack at dawn").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"attack at dawn");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `tracing`: `TracingObserver`, which emits every intermediate round state
//! - `serde`: `Serialize`/`Deserialize` for [`Variant`] and [`Mode`]
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`rijndael-params`]: sizes and round counts
//! - [`rijndael-api`]: error type, `Variant`, `Mode`, `SecretKey`
//! - [`rijndael-algorithms`]: block cipher, padding, segmentation, modes
//! - [`rijndael-symmetric`]: message-level `Cipher`, key/IV generation
//!
//! No constant-time guarantees are made; the S-box is a table lookup.

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use rijndael_algorithms as algorithms;
pub use rijndael_api as api;
pub use rijndael_params as params;
pub use rijndael_symmetric as symmetric;

pub use rijndael_api::{Error, Mode, Result, SecretKey, Variant};
pub use rijndael_symmetric::{
    decrypt, encrypt, generate_iv, generate_iv_with, generate_key, generate_key_with,
    random_bytes, Cipher,
};

/// Common imports for rijndael users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Configuration and keys
    pub use crate::api::{Mode, SecretKey, Variant};

    // Message-level cipher
    pub use crate::symmetric::Cipher;

    // Block layer
    pub use crate::algorithms::block::aes::{NoopObserver, RecordingObserver, StateObserver, Step};
    pub use crate::algorithms::{Aes, BlockBuffer, BlockCipher, Cbc, Ecb};
}
