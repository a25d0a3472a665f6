//! Constants for the AES block cipher

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes, identical for every key size
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one block)
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Number of 32-bit words in the state (Nb)
pub const AES_NB: usize = 4;

/// Key length in 32-bit words (Nk) for AES-128
pub const AES128_NK: usize = 4;

/// Key length in 32-bit words (Nk) for AES-192
pub const AES192_NK: usize = 6;

/// Key length in 32-bit words (Nk) for AES-256
pub const AES256_NK: usize = 8;

/// Number of rounds (Nr) for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds (Nr) for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds (Nr) for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Expanded key length in 32-bit words for AES-128
pub const AES128_SCHEDULE_WORDS: usize = AES_NB * (AES128_ROUNDS + 1);

/// Expanded key length in 32-bit words for AES-192
pub const AES192_SCHEDULE_WORDS: usize = AES_NB * (AES192_ROUNDS + 1);

/// Expanded key length in 32-bit words for AES-256
pub const AES256_SCHEDULE_WORDS: usize = AES_NB * (AES256_ROUNDS + 1);

/// Largest expanded key length in 32-bit words
pub const AES_MAX_SCHEDULE_WORDS: usize = AES256_SCHEDULE_WORDS;
