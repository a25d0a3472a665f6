//! Constant-time operations on byte slices

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different lengths compare unequal without inspecting their contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Returns a `Choice` that is set when every byte of `bytes` equals `value`
///
/// All bytes are visited regardless of where the first mismatch is.
pub fn ct_all_eq(bytes: &[u8], value: u8) -> Choice {
    bytes
        .iter()
        .fold(Choice::from(1), |acc, b| acc & b.ct_eq(&value))
}

/// XOR `src` into `dst` byte by byte
///
/// Both slices must have the same length.
pub fn ct_xor_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}
