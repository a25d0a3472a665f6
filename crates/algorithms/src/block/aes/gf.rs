//! Arithmetic in GF(2⁸) with AES's reduction polynomial x⁸ + x⁴ + x³ + x + 1

/// Low byte of the reduction polynomial, folded in when the top bit overflows
pub const REDUCTION: u8 = 0x1B;

/// Multiply by {02}
#[inline(always)]
pub fn xtime(a: u8) -> u8 {
    (a << 1) ^ ((a >> 7) * REDUCTION)
}

/// Multiply two bytes in GF(2⁸)
///
/// Eight shift-and-conditional-XOR steps; the reduction is applied whenever
/// the shifted operand carries out of bit 7.
#[inline(always)]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        a = xtime(a);
        b >>= 1;
    }
    p
}
