//! Overflow-safe multiply-then-divide.
//!
//! Fixed-point interpolation needs `a * b / divisor` where `a * b` can
//! exceed 128 bits even though the quotient fits. The product is
//! carried in a 256-bit (hi, lo) pair built from 64-bit limbs, then
//! reduced by restoring long division.

use crate::types::MathError;

const LIMB_MASK: u128 = (1 << 64) - 1;

/// Compute `a * b / divisor` with truncation toward zero.
///
/// The full 256-bit product is formed before dividing, so the result is
/// exact whenever the quotient fits in `u128` regardless of whether the
/// intermediate product overflows 128 bits.
///
/// # Arguments
///
/// * `a` - First factor
/// * `b` - Second factor
/// * `divisor` - Divisor, must be nonzero
///
/// # Returns
///
/// * `Ok(q)` - The floored quotient `⌊a * b / divisor⌋`
/// * `Err(MathError::DivisionByZero)` - `divisor` is zero
/// * `Err(MathError::Overflow)` - the quotient exceeds `u128::MAX`
///
/// # Example
///
/// ```
/// use lsp_core::math::mul_div_floor;
///
/// // Product overflows u128, quotient does not.
/// let q = mul_div_floor(1 << 127, 4, 8).unwrap();
/// assert_eq!(q, 1 << 126);
///
/// // Truncating: 7 * 1 / 2 = 3.
/// assert_eq!(mul_div_floor(7, 1, 2).unwrap(), 3);
/// ```
pub fn mul_div_floor(a: u128, b: u128, divisor: u128) -> Result<u128, MathError> {
    if divisor == 0 {
        return Err(MathError::DivisionByZero);
    }

    // Fast path: product fits in 128 bits.
    if let Some(product) = a.checked_mul(b) {
        return Ok(product / divisor);
    }

    let (hi, lo) = mul_wide(a, b);

    // quotient >= 2^128 iff the high word reaches the divisor
    if hi >= divisor {
        return Err(MathError::Overflow);
    }

    let (quotient, _) = div_wide(hi, lo, divisor);
    Ok(quotient)
}

/// Full 256-bit product of two `u128` values as a (hi, lo) pair.
///
/// Schoolbook multiplication over 64-bit limbs; each partial product
/// fits in `u128`, carries are tracked explicitly.
fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & LIMB_MASK);
    let (b_hi, b_lo) = (b >> 64, b & LIMB_MASK);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // mid = lh + hl contributes at bit 64; its own carry lands at bit 192.
    let (mid, mid_carry) = lh.overflowing_add(hl);
    let (lo, lo_carry) = ll.overflowing_add(mid << 64);
    let hi = hh + (mid >> 64) + ((mid_carry as u128) << 64) + lo_carry as u128;

    (hi, lo)
}

/// Divide the 256-bit value `hi * 2^128 + lo` by `divisor`.
///
/// Restoring long division, one quotient bit per iteration. Requires
/// `hi < divisor` so the quotient fits in `u128`.
fn div_wide(hi: u128, lo: u128, divisor: u128) -> (u128, u128) {
    debug_assert!(divisor != 0);
    debug_assert!(hi < divisor);

    let mut rem = hi;
    let mut quotient = 0u128;

    let mut bit = 128;
    while bit > 0 {
        bit -= 1;
        // Shift the next dividend bit into the remainder. The shifted-out
        // top bit makes the true remainder rem + 2^128, which always
        // exceeds the divisor; wrapping_sub yields the correct residue.
        let top = rem >> 127;
        rem = (rem << 1) | ((lo >> bit) & 1);
        if top == 1 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quotient |= 1 << bit;
        }
    }

    (quotient, rem)
}
