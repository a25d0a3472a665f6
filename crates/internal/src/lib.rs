//! Internal utilities for the rijndael workspace
//!
//! Nothing here is part of the public API. Byte-order packing for the key
//! schedule and branch-free byte comparisons for padding and block XOR.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
