//! Error handling for message-level operations
//!
//! Uses the API error system directly; the block layer reports through the
//! same type, so nothing needs converting at this boundary.

pub use rijndael_api::error::{validate, Error, Result};
