//! Public error taxonomy and core types for the rijndael workspace
//!
//! Every crate above this one reports failures through [`Error`] and
//! describes the cipher configuration with [`Variant`] and [`Mode`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::{Mode, SecretKey, Variant};
