//! Error type definitions for cipher operations

#[cfg(feature = "std")]
use std::string::String;

use crate::types::{Mode, Variant};

/// Primary error type for cipher operations
///
/// All variants are local and non-retryable: they describe malformed caller
/// input or tampered ciphertext, never a transient condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key byte length does not match the selected variant
    InvalidKeyLength {
        variant: Variant,
        expected: usize,
        actual: usize,
    },

    /// Ciphertext is empty or not a whole number of blocks
    InvalidInputLength {
        context: &'static str,
        block_size: usize,
        actual: usize,
    },

    /// A mode that chains blocks was requested without an IV
    MissingIv {
        mode: Mode,
    },

    /// PKCS#7 padding did not validate after decryption
    InvalidPadding {
        context: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// The OS entropy source could not produce bytes
    RandomGeneration {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKeyLength { variant, expected, actual } => {
                write!(f, "{}: invalid key length (expected {}, got {})",
                    variant, expected, actual)
            },
            Self::InvalidInputLength { context, block_size, actual } => {
                write!(f, "{}: length {} is not a positive multiple of {}",
                    context, actual, block_size)
            },
            Self::MissingIv { mode } => {
                write!(f, "{} mode requires an initialization vector", mode)
            },
            Self::InvalidPadding { context } => {
                write!(f, "Invalid padding: {}", context)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            #[cfg(feature = "std")]
            Self::RandomGeneration { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::RandomGeneration { context } => {
                write!(f, "Random generation error: {}", context)
            },
        }
    }
}

impl Error {
    /// Build an `InvalidParameter` error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }

    /// Build a `RandomGeneration` error from an RNG failure
    pub fn random(context: &'static str, err: &rand::Error) -> Self {
        #[cfg(not(feature = "std"))]
        let _ = err;
        Self::RandomGeneration {
            context,
            #[cfg(feature = "std")]
            message: std::format!("{}", err),
        }
    }
}
