//! Magnitude addition and subtraction.
//!
//! Sign handling lives with the caller; every function here treats its
//! inputs as non-negative magnitudes. Carries propagate as `r >> 30` and
//! borrows as `(r >> 30) & 1` over the 30-bit digit field, so all loops
//! stay inside plain `u32` arithmetic.

use super::{trim, Digit, DIGIT_BITS, DIGIT_MASK};

/// Add two magnitudes.
pub(crate) fn add(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    if x.len() < y.len() {
        return add(y, x);
    }
    let mut result = Vec::with_capacity(x.len() + 1);
    let mut carry = 0;
    for (i, &xd) in x.iter().enumerate() {
        let r = xd + y.get(i).copied().unwrap_or(0) + carry;
        carry = r >> DIGIT_BITS;
        result.push(r & DIGIT_MASK);
    }
    if carry != 0 {
        result.push(carry);
    }
    result
}

/// Subtract `y` from `x`. Requires `x >= y`.
pub(crate) fn sub(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    debug_assert!(x.len() >= y.len());
    let mut result = Vec::with_capacity(x.len());
    let mut borrow = 0;
    for (i, &xd) in x.iter().enumerate() {
        let r = xd
            .wrapping_sub(y.get(i).copied().unwrap_or(0))
            .wrapping_sub(borrow);
        borrow = (r >> DIGIT_BITS) & 1;
        result.push(r & DIGIT_MASK);
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut result);
    result
}

/// Increment a magnitude by one.
pub(crate) fn add_one(x: &[Digit]) -> Vec<Digit> {
    let mut result = Vec::with_capacity(x.len() + 1);
    let mut carry = 1;
    for &xd in x {
        let r = xd + carry;
        carry = r >> DIGIT_BITS;
        result.push(r & DIGIT_MASK);
    }
    if carry != 0 {
        result.push(carry);
    }
    result
}

/// Decrement a non-zero magnitude by one.
pub(crate) fn sub_one(x: &[Digit]) -> Vec<Digit> {
    debug_assert!(!x.is_empty());
    let mut result = Vec::with_capacity(x.len());
    let mut borrow = 1;
    for &xd in x {
        let r = xd.wrapping_sub(borrow);
        borrow = (r >> DIGIT_BITS) & 1;
        result.push(r & DIGIT_MASK);
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut result);
    result
}

// TESTS
// -----
