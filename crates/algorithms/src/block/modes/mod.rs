//! Block cipher modes of operation
//!
//! Both modes work on whole blocks held in a [`BlockBuffer`]; padding is
//! applied above this layer.
//!
//! [`BlockBuffer`]: super::BlockBuffer

pub mod cbc;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;
