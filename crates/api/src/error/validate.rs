//! Validation utilities shared by every layer

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `actual` is a positive multiple of `block_size`
#[inline(always)]
pub fn whole_blocks(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual == 0 || actual % block_size != 0 {
        return Err(Error::InvalidInputLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}
