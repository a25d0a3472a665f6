//! AES block cipher, PKCS#7 padding and ECB/CBC modes
//!
//! Everything here is built from first principles: the S-box, GF(2⁸)
//! arithmetic, key expansion and round transforms live under
//! [`block::aes`]. The crate is usable in `no_std` environments with an
//! allocator.
//!
//! # Layout
//!
//! - [`block::aes`]: the block cipher and its round pipeline
//! - [`block::segment`]: splitting padded data into blocks
//! - [`block::modes`]: ECB and CBC over any [`BlockCipher`]
//! - [`padding`]: PKCS#7 pad and unpad
//!
//! Table lookups are used for the S-box; this implementation makes no
//! constant-time claims.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher, segmentation and modes
pub mod block;
pub use block::{Aes, BlockBuffer, BlockCipher, Cbc, Ecb, RoundKeySchedule, State};
pub use block::aes::{NoopObserver, RecordingObserver, StateObserver, Step};
#[cfg(feature = "tracing")]
pub use block::aes::TracingObserver;

// Padding
pub mod padding;
