//! Error handling for the block layer
//!
//! The block layer reports through the shared [`rijndael_api::Error`]; this
//! module only re-exports it so paths inside the crate stay short.

pub use rijndael_api::error::{validate, Error, Result};
