//! String conversion for radices 2 through 36.
//!
//! Parsing accumulates characters into 30-bit parts so the expensive
//! multiply-add against the growing magnitude runs once per part rather
//! than once per character. Formatting has a single-pass bit-packing path
//! for power-of-two radices and a divide-and-conquer path for the rest.

use crate::arith::{self, div, mul, Digit, DIGIT_BITS};
use crate::bigint::{BigInt, MAX_LENGTH};

/// Internal parse failure, translated into a public error at the
/// constructor boundary.
pub(crate) enum ParseError {
    /// The string does not match the grammar.
    Syntax,
    /// The value is syntactically fine but too large to represent.
    TooBig,
}

/// Conversion characters for digits 0..36.
const CONVERSION_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `ceil(log2(radix) * 32)` for each radix; the fixed-point scale by 32
/// turns the chars-to-bits conversion into integer arithmetic when sizing
/// parse buffers and divide-and-conquer splits.
#[rustfmt::skip]
const MAX_BITS_PER_CHAR: [u32; 37] = [
    0, 0, 32, 51, 64, 75, 83, 90, 96,          // 0..=8
    102, 107, 111, 115, 119, 122, 126, 128,    // 9..=16
    131, 134, 136, 139, 141, 143, 145, 147,    // 17..=24
    149, 151, 153, 154, 156, 158, 159, 160,    // 25..=32
    162, 163, 165, 166,                        // 33..=36
];

// PARSING
// -------

/// Parse a string. `radix: None` auto-detects `0x`/`0o`/`0b` prefixes and
/// accepts a sign; an explicit radix only accepts a sign for 10 and a
/// prefix for 16.
pub(crate) fn parse(s: &str, radix: Option<u32>) -> Result<BigInt, ParseError> {
    let trimmed = s.trim_matches(char::is_whitespace);
    if trimmed.is_empty() {
        // "" and whitespace-only coerce to zero.
        return Ok(BigInt::zero());
    }
    let bytes = trimmed.as_bytes();
    let mut pos = 0;
    let mut sign = false;

    let sign_allowed = matches!(radix, None | Some(10));
    if sign_allowed && (bytes[0] == b'+' || bytes[0] == b'-') {
        sign = bytes[0] == b'-';
        pos += 1;
    }

    let radix = match radix {
        Some(16) => {
            if bytes[pos..].starts_with(b"0x") || bytes[pos..].starts_with(b"0X") {
                pos += 2;
            }
            16
        }
        Some(r) => r,
        // A sign forces plain decimal; prefixes are only detected bare.
        None if pos == 0 => match bytes.get(..2) {
            Some(b"0x") | Some(b"0X") => {
                pos += 2;
                16
            }
            Some(b"0o") | Some(b"0O") => {
                pos += 2;
                8
            }
            Some(b"0b") | Some(b"0B") => {
                pos += 2;
                2
            }
            _ => 10,
        },
        None => 10,
    };

    let digits = &bytes[pos..];
    if digits.is_empty() {
        // A lone sign or prefix is not a number.
        return Err(ParseError::Syntax);
    }
    let mut values = Vec::with_capacity(digits.len());
    for &c in digits {
        match char_value(c) {
            Some(v) if v < radix => values.push(v as u8),
            _ => return Err(ParseError::Syntax),
        }
    }
    // Leading zeros contribute nothing.
    let first_nonzero = values.iter().position(|&v| v != 0);
    let values = match first_nonzero {
        None => return Ok(BigInt::zero()),
        Some(i) => &values[i..],
    };

    // ceil(log2(radix)) * chars, scaled by 32, bounds the bit length.
    let max_bits = values.len() as u64 * MAX_BITS_PER_CHAR[radix as usize] as u64;
    let digit_bound = ((max_bits + 31) >> 5) as usize / DIGIT_BITS as usize + 1;
    if digit_bound > MAX_LENGTH + 1 {
        return Err(ParseError::TooBig);
    }

    let magnitude = if radix.is_power_of_two() {
        parse_power_of_two(values, radix)
    } else {
        parse_generic(values, radix, digit_bound)
    };
    if magnitude.len() > MAX_LENGTH {
        return Err(ParseError::TooBig);
    }
    Ok(BigInt::from_magnitude(sign, magnitude))
}

/// The numeric value of an ASCII digit or letter.
#[inline]
fn char_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'a'..=b'z' => Some((c - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((c - b'A') as u32 + 10),
        _ => None,
    }
}

/// Pack character values straight into digit bits. Every power-of-two
/// radix width (1, 2, 3, 4, 5) divides 30, so characters never straddle a
/// digit boundary.
fn parse_power_of_two(values: &[u8], radix: u32) -> Vec<Digit> {
    let bits_per_char = radix.trailing_zeros();
    let mut digits = Vec::with_capacity(
        (values.len() * bits_per_char as usize) / DIGIT_BITS as usize + 1,
    );
    let mut acc: Digit = 0;
    let mut acc_bits = 0;
    for &v in values.iter().rev() {
        acc |= (v as Digit) << acc_bits;
        acc_bits += bits_per_char;
        if acc_bits == DIGIT_BITS {
            digits.push(acc);
            acc = 0;
            acc_bits = 0;
        }
    }
    if acc_bits > 0 {
        digits.push(acc);
    }
    arith::trim(&mut digits);
    digits
}

/// Accumulate 30-bit parts with the largest per-radix multiplier, folding
/// each full part into the magnitude with one multiply-add.
fn parse_generic(values: &[u8], radix: u32, digit_bound: usize) -> Vec<Digit> {
    let (multiplier, chars_per_part) = mul::max_power_per_digit(radix);
    let mut digits: Vec<Digit> = Vec::with_capacity(digit_bound);
    let mut part: Digit = 0;
    let mut part_chars: usize = 0;
    for &v in values {
        part = part * radix + v as Digit;
        part_chars += 1;
        if part_chars == chars_per_part {
            mul::imul_add(&mut digits, multiplier, part);
            part = 0;
            part_chars = 0;
        }
    }
    if part_chars > 0 {
        mul::imul_add(&mut digits, radix.pow(part_chars as u32), part);
    }
    digits
}

// FORMATTING
// ----------

/// Format a value in the given radix. The radix must already be validated
/// to lie in `2..=36`.
pub(crate) fn emit(x: &BigInt, radix: u32) -> String {
    debug_assert!((2..=36).contains(&radix));
    if x.is_zero() {
        return "0".to_owned();
    }
    let body = if radix.is_power_of_two() {
        emit_power_of_two(&x.digits, radix)
    } else {
        emit_generic(&x.digits, radix)
    };
    let mut result = String::with_capacity(body.len() + 1);
    if x.sign {
        result.push('-');
    }
    result.push_str(&body);
    result
}

/// Single pass over the digits, slicing `bits_per_char` wide character
/// slots out of each digit. The widths 1..=5 all divide 30, so characters
/// never straddle a digit boundary.
fn emit_power_of_two(digits: &[Digit], radix: u32) -> String {
    let bits_per_char = radix.trailing_zeros();
    let char_mask = radix - 1;
    let chars_per_digit = DIGIT_BITS / bits_per_char;
    let chars_required =
        (arith::bit_length(digits) + bits_per_char as usize - 1) / bits_per_char as usize;
    let mut out = Vec::with_capacity(chars_required);
    for &d in digits {
        let mut acc = d;
        for _ in 0..chars_per_digit {
            if out.len() == chars_required {
                break;
            }
            out.push(CONVERSION_CHARS[(acc & char_mask) as usize]);
            acc >>= bits_per_char;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

/// Divide-and-conquer: split off `radix^(chars/2)` (the conqueror), emit
/// both halves recursively, and zero-pad the low half to the conqueror's
/// exponent.
fn emit_generic(digits: &[Digit], radix: u32) -> String {
    debug_assert!(!digits.is_empty());
    if digits.len() == 1 {
        return emit_host_digit(digits[0], radix);
    }
    // Lower bound on the character count; keeping it a lower bound makes
    // the conqueror no bigger than the value, so the quotient is nonzero
    // and the recursion always shrinks.
    let chars_low_bound = ((arith::bit_length(digits) as u64 - 1) * 32
        / MAX_BITS_PER_CHAR[radix as usize] as u64) as usize
        + 1;
    let second_half_chars = (chars_low_bound / 2).max(1);

    let mut conqueror = vec![1];
    mul::imul_pow(&mut conqueror, radix, second_half_chars);

    let (quotient, low) = match conqueror.as_slice() {
        [d] if *d <= div::SMALL_DIVISOR_MAX => {
            let (q, r) = div::div_rem_small(digits, *d);
            (q, emit_host_digit(r, radix))
        }
        _ => {
            let (q, r) = div::div_rem_large(digits, &conqueror, true, true);
            let r = r.unwrap();
            let low = if r.is_empty() {
                String::new()
            } else {
                emit_generic(&r, radix)
            };
            (q.unwrap(), low)
        }
    };
    debug_assert!(!quotient.is_empty());
    let high = emit_generic(&quotient, radix);

    let mut result = String::with_capacity(high.len() + second_half_chars);
    result.push_str(&high);
    for _ in low.len()..second_half_chars {
        result.push('0');
    }
    result.push_str(&low);
    result
}

/// Format a single digit's worth of value with host arithmetic; `itoa`
/// covers the common decimal case.
fn emit_host_digit(mut value: u32, radix: u32) -> String {
    if radix == 10 {
        return itoa::Buffer::new().format(value).to_owned();
    }
    if value == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while value != 0 {
        out.push(CONVERSION_CHARS[(value % radix) as usize]);
        value /= radix;
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

// TESTS
// -----
