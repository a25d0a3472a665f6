//! Message-level AES encryption for the rijndael library
//!
//! This crate ties the block layer together: PKCS#7 padding, block
//! segmentation and an ECB or CBC driver behind one validated [`Cipher`]
//! value, plus one-shot [`encrypt`] / [`decrypt`] functions and key/IV
//! generation from the OS entropy source.
//!
//! ```
//! use rijndael_symmetric::{decrypt, encrypt, Mode, Variant};
//!
//! let key = [0x11u8; 32];
//! let iv = [0x22u8; 16];
//!
//! let ciphertext = encrypt(b"hello", Variant::Aes256, Mode::Cbc, &key, Some(&iv)).unwrap();
//! assert_eq!(ciphertext.len(), 16);
//!
//! let plaintext = decrypt(&ciphertext, Variant::Aes256, Mode::Cbc, &key, Some(&iv)).unwrap();
//! assert_eq!(plaintext, b"hello");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cipher;
pub mod error;
pub mod keys;

// Re-export main types for convenience
pub use cipher::{decrypt, encrypt, Cipher};
pub use keys::{generate_iv, generate_iv_with, generate_key, generate_key_with, random_bytes};

// Re-export the API error system instead of custom error types
pub use error::{validate, Error, Result};
pub use rijndael_api::{Mode, SecretKey, Variant};
