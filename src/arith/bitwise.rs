//! Magnitude bitwise operations.
//!
//! These operate on magnitudes only; the two's-complement identities that
//! map signed AND/OR/XOR/NOT onto them live in the sign-aware layer.
//! Missing digits of the shorter operand read as zero.

use super::{trim, Digit, DIGIT_BITS, DIGIT_MASK};

/// Pairwise AND; the result is never longer than the shorter operand.
pub(crate) fn and(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    let mut result: Vec<Digit> = x.iter().zip(y).map(|(&a, &b)| a & b).collect();
    trim(&mut result);
    result
}

/// `x AND NOT y`: keeps the bits of `x` not set in `y`.
pub(crate) fn and_not(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    let mut result: Vec<Digit> = x
        .iter()
        .enumerate()
        .map(|(i, &a)| a & !y.get(i).copied().unwrap_or(0) & DIGIT_MASK)
        .collect();
    trim(&mut result);
    result
}

/// Pairwise OR over the longer length.
pub(crate) fn or(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    if x.len() < y.len() {
        return or(y, x);
    }
    x.iter()
        .enumerate()
        .map(|(i, &a)| a | y.get(i).copied().unwrap_or(0))
        .collect()
}

/// Pairwise XOR over the longer length.
pub(crate) fn xor(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    if x.len() < y.len() {
        return xor(y, x);
    }
    let mut result: Vec<Digit> = x
        .iter()
        .enumerate()
        .map(|(i, &a)| a ^ y.get(i).copied().unwrap_or(0))
        .collect();
    trim(&mut result);
    result
}

/// Keep the low `n` bits of the magnitude.
pub(crate) fn truncate_to_bits(x: &[Digit], n: usize) -> Vec<Digit> {
    let needed = (n + DIGIT_BITS as usize - 1) / DIGIT_BITS as usize;
    let mut result: Vec<Digit> = x[..x.len().min(needed)].to_vec();
    if result.len() == needed && n % DIGIT_BITS as usize != 0 {
        let last = result.len() - 1;
        result[last] &= (1 << (n % DIGIT_BITS as usize)) - 1;
    }
    trim(&mut result);
    result
}

/// Compute `2^n - (x mod 2^n)` for a non-zero `x mod 2^n`.
pub(crate) fn sub_from_power_of_two(x: &[Digit], n: usize) -> Vec<Digit> {
    let truncated = truncate_to_bits(x, n);
    debug_assert!(!truncated.is_empty());
    // 2^n as digits: a 1 bit at position n.
    let digit_index = n / DIGIT_BITS as usize;
    let mut power = vec![0; digit_index + 1];
    power[digit_index] = 1 << (n % DIGIT_BITS as usize);
    super::add::sub(&power, &truncated)
}

/// Are the low `n` bits of the magnitude all zero?
pub(crate) fn low_bits_zero(x: &[Digit], n: usize) -> bool {
    let full = n / DIGIT_BITS as usize;
    if x[..x.len().min(full)].iter().any(|&d| d != 0) {
        return false;
    }
    match x.get(full) {
        None => true,
        Some(&d) => d & ((1 << (n % DIGIT_BITS as usize)) - 1) == 0,
    }
}

/// Does the magnitude have a set bit at position `n`?
pub(crate) fn bit_at(x: &[Digit], n: usize) -> bool {
    match x.get(n / DIGIT_BITS as usize) {
        None => false,
        Some(&d) => d >> (n % DIGIT_BITS as usize) & 1 != 0,
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_test() {
        assert_eq!(and(&[0b1100, 7], &[0b1010]), vec![0b1000]);
        assert_eq!(and(&[0b1100], &[0b0011]), Vec::<Digit>::new());
    }

    #[test]
    fn and_not_test() {
        assert_eq!(and_not(&[0b1100, 7], &[0b0100]), vec![0b1000, 7]);
        assert_eq!(and_not(&[0b1100], &[0b1100, 1]), Vec::<Digit>::new());
    }

    #[test]
    fn or_xor_test() {
        assert_eq!(or(&[0b1100], &[0b0011, 5]), vec![0b1111, 5]);
        assert_eq!(xor(&[0b1100], &[0b1010, 5]), vec![0b0110, 5]);
        assert_eq!(xor(&[7, 5], &[7, 5]), Vec::<Digit>::new());
    }

    #[test]
    fn truncate_test() {
        assert_eq!(truncate_to_bits(&[0xff], 4), vec![0xf]);
        assert_eq!(truncate_to_bits(&[0xff], 8), vec![0xff]);
        assert_eq!(truncate_to_bits(&[0xff], 300), vec![0xff]);
        // Cut exactly at a digit boundary.
        assert_eq!(truncate_to_bits(&[1, 2, 3], 60), vec![1, 2]);
        assert_eq!(truncate_to_bits(&[1, 2, 3], 61), vec![1, 2, 1]);
        assert_eq!(truncate_to_bits(&[0, 2], 30), Vec::<Digit>::new());
    }

    #[test]
    fn sub_from_power_of_two_test() {
        // 2^8 - 1 = 255
        assert_eq!(sub_from_power_of_two(&[1], 8), vec![255]);
        // 2^8 - 255 = 1
        assert_eq!(sub_from_power_of_two(&[255], 8), vec![1]);
        // 2^32 - 1: [2^30 - 1, 3]
        assert_eq!(sub_from_power_of_two(&[1], 32), vec![DIGIT_MASK, 3]);
        // Truncation applies first: (2^31 + 5) mod 2^8 = 5.
        assert_eq!(sub_from_power_of_two(&[5, 2], 8), vec![251]);
    }

    #[test]
    fn low_bits_zero_test() {
        assert!(low_bits_zero(&[0b1000], 3));
        assert!(!low_bits_zero(&[0b1100], 3));
        assert!(low_bits_zero(&[0, 1], 30));
        assert!(!low_bits_zero(&[1, 1], 30));
        assert!(low_bits_zero(&[0b100], 0));
    }

    #[test]
    fn bit_at_test() {
        assert!(bit_at(&[0b100], 2));
        assert!(!bit_at(&[0b100], 3));
        assert!(bit_at(&[0, 1], 30));
        assert!(!bit_at(&[0, 1], 90));
    }
}
