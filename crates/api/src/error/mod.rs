//! Error handling for the rijndael workspace

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}

