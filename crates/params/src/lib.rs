//! Constant values for the rijndael AES implementation
//!
//! Sizes and round counts from FIPS-197, shared by every other crate in
//! the workspace so that no layer hard-codes its own copy.

#![no_std]

pub mod utils;

pub use utils::symmetric::*;
