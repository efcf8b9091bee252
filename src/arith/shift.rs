//! Magnitude shifts.
//!
//! Shifts decompose into a whole-digit move plus a sub-digit bit shift.
//! Rounding for negative right shifts is decided here (did any set bit
//! fall off the end?) but applied by the caller, which owns sign logic.

use super::{trim, Digit, DIGIT_BITS, DIGIT_MASK};

/// Shift a magnitude left by `shift` bits.
pub(crate) fn shl(x: &[Digit], shift: usize) -> Vec<Digit> {
    if x.is_empty() {
        return Vec::new();
    }
    let digit_shift = shift / DIGIT_BITS as usize;
    let bits_shift = (shift % DIGIT_BITS as usize) as u32;
    let mut result = Vec::with_capacity(x.len() + digit_shift + 1);
    result.resize(digit_shift, 0);
    if bits_shift == 0 {
        result.extend_from_slice(x);
    } else {
        let mut carry = 0;
        for &d in x {
            result.push(((d << bits_shift) & DIGIT_MASK) | carry);
            carry = d >> (DIGIT_BITS - bits_shift);
        }
        if carry != 0 {
            result.push(carry);
        }
    }
    result
}

/// Shift a magnitude right by `shift` bits, discarding shifted-out bits.
/// Also reports whether any discarded bit was set, which drives the
/// round-toward-negative-infinity correction for negative values.
pub(crate) fn shr(x: &[Digit], shift: usize) -> (Vec<Digit>, bool) {
    let digit_shift = shift / DIGIT_BITS as usize;
    let bits_shift = (shift % DIGIT_BITS as usize) as u32;
    if digit_shift >= x.len() {
        // Everything shifted out; a trimmed non-empty magnitude is nonzero.
        return (Vec::new(), !x.is_empty());
    }
    let mut lost = x[..digit_shift].iter().any(|&d| d != 0);
    if bits_shift != 0 {
        lost |= x[digit_shift] & ((1 << bits_shift) - 1) != 0;
    }
    let mut result = Vec::with_capacity(x.len() - digit_shift);
    if bits_shift == 0 {
        result.extend_from_slice(&x[digit_shift..]);
    } else {
        for (i, &d) in x[digit_shift..].iter().enumerate() {
            let next = x.get(digit_shift + i + 1).copied().unwrap_or(0);
            result
                .push((d >> bits_shift) | ((next << (DIGIT_BITS - bits_shift)) & DIGIT_MASK));
        }
        trim(&mut result);
    }
    (result, lost)
}

// TESTS
// -----
