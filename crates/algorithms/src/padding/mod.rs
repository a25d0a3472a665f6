//! PKCS#7 padding for 16-byte blocks
//!
//! Padding is always applied: an input that is already block-aligned gets a
//! full extra block of `0x10` bytes, so the pad length is always in `1..=16`
//! and removal is unambiguous.

use alloc::vec::Vec;
use zeroize::Zeroize;

use rijndael_api::{Error, Result};
use rijndael_internal::constant_time::ct_all_eq;
use rijndael_params::AES_BLOCK_SIZE;

const CONTEXT: &str = "PKCS#7";

/// Number of pad bytes appended to a message of `len` bytes
#[inline]
pub const fn padding_len(len: usize) -> usize {
    AES_BLOCK_SIZE - len % AES_BLOCK_SIZE
}

/// Length of the padded form of a message of `len` bytes
#[inline]
pub const fn padded_len(len: usize) -> usize {
    len + padding_len(len)
}

/// Returns a padded copy of `message`
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(message.len()));
    out.extend_from_slice(message);
    pad_in_place(&mut out);
    out
}

/// Appends PKCS#7 padding to `buffer`
pub fn pad_in_place(buffer: &mut Vec<u8>) {
    let p = padding_len(buffer.len());
    buffer.resize(buffer.len() + p, p as u8);
}

/// Checks the trailing pad and returns its length
///
/// The last byte `p` must be in `1..=16`, no larger than the buffer, and the
/// last `p` bytes must all equal `p`.
pub fn pad_length(padded: &[u8]) -> Result<usize> {
    let p = match padded.last() {
        Some(&last) => last as usize,
        None => return Err(Error::InvalidPadding { context: CONTEXT }),
    };

    if p == 0 || p > AES_BLOCK_SIZE || p > padded.len() {
        return Err(Error::InvalidPadding { context: CONTEXT });
    }

    let tail = &padded[padded.len() - p..];
    if !bool::from(ct_all_eq(tail, p as u8)) {
        return Err(Error::InvalidPadding { context: CONTEXT });
    }

    Ok(p)
}

/// Returns the message with its padding stripped
pub fn unpad(padded: &[u8]) -> Result<&[u8]> {
    let p = pad_length(padded)?;
    Ok(&padded[..padded.len() - p])
}

/// Strips padding from `buffer`, wiping the removed bytes
///
/// On error the buffer is left untouched.
pub fn unpad_in_place(buffer: &mut Vec<u8>) -> Result<()> {
    let p = pad_length(buffer)?;
    let keep = buffer.len() - p;
    buffer[keep..].zeroize();
    buffer.truncate(keep);
    Ok(())
}
