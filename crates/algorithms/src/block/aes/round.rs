//! The four round transformations and their inverses
//!
//! All of them act on a [`State`] in place.

use rijndael_internal::endian::u32_to_be_bytes;

use super::gf::gf_mul;
use super::sbox::{inv_sub_byte, sub_byte};
use super::state::State;

/// MixColumns matrix, first row; each later row is this rotated right by one
const MIX_COEFFS: [u8; 4] = [0x02, 0x03, 0x01, 0x01];

/// InvMixColumns matrix, first row
const INV_MIX_COEFFS: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// SubBytes: forward S-box on every byte
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sub_byte(*byte);
    }
}

/// InvSubBytes: inverse S-box on every byte
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sub_byte(*byte);
    }
}

/// ShiftRows: row `r` rotates left by `r`
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        state.row_mut(r).rotate_left(r);
    }
}

/// InvShiftRows: row `r` rotates right by `r`
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        state.row_mut(r).rotate_right(r);
    }
}

/// Multiply one column by the circulant matrix whose first row is `coeffs`
#[inline(always)]
fn mix_column(column: [u8; 4], coeffs: &[u8; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (r, slot) in out.iter_mut().enumerate() {
        *slot = column
            .iter()
            .enumerate()
            .fold(0u8, |acc, (k, &b)| acc ^ gf_mul(coeffs[(k + 4 - r) % 4], b));
    }
    out
}

/// MixColumns: each column times {02,03,01,01}
pub fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let mixed = mix_column(state.column(c), &MIX_COEFFS);
        state.set_column(c, mixed);
    }
}

/// InvMixColumns: each column times {0e,0b,0d,09}
pub fn inv_mix_columns(state: &mut State) {
    for c in 0..4 {
        let mixed = mix_column(state.column(c), &INV_MIX_COEFFS);
        state.set_column(c, mixed);
    }
}

/// AddRoundKey: XOR word `c` of the round key into column `c`
pub fn add_round_key(state: &mut State, round_key: &[u32]) {
    debug_assert_eq!(round_key.len(), 4);
    for (c, word) in round_key.iter().enumerate() {
        let bytes = u32_to_be_bytes(*word);
        for (r, byte) in bytes.iter().enumerate() {
            state.row_mut(r)[c] ^= byte;
        }
    }
}
