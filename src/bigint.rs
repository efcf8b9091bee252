//! The arbitrary-precision signed integer type.
//!
//! A `BigInt` is a sign flag plus a little-endian vector of 30-bit digits.
//! The representation is canonical: the most significant digit is never
//! zero, and zero itself is the empty vector with a positive sign. Every
//! public operation returns a freshly constructed, canonical value.
//!
//! Sign dispatch lives here; the digit-vector algorithms live in
//! [`crate::arith`] and operate on magnitudes only.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith::{self, add, bitwise, div, mul, shift, Digit, DIGIT_BITS, DIGIT_MASK};
use crate::double;
use crate::error::{Error, Result};
use crate::radix::{self, ParseError};

/// Maximum number of digits in a `BigInt`.
pub const MAX_LENGTH: usize = 1 << 25;

/// Upper bound on the bit length of a `BigInt`.
pub const MAX_LENGTH_BITS: u32 = 1 << 30;

/// An arbitrary-precision signed integer with ECMAScript BigInt semantics.
///
/// ```
/// use ecma_bigint::BigInt;
///
/// let x: BigInt = "9007199254740991".parse().unwrap();
/// let square = x.multiply(&x).unwrap();
/// assert_eq!(square.to_string(), "81129638414606663681390495662081");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// True for negative values. Zero is never negative.
    pub(crate) sign: bool,
    /// Magnitude, least significant digit first, trimmed.
    pub(crate) digits: Vec<Digit>,
}

impl BigInt {
    /// The value `0`.
    pub(crate) fn zero() -> BigInt {
        BigInt {
            sign: false,
            digits: Vec::new(),
        }
    }

    /// A one-digit value.
    pub(crate) fn one_digit(digit: Digit, sign: bool) -> BigInt {
        debug_assert!(digit <= DIGIT_MASK);
        if digit == 0 {
            BigInt::zero()
        } else {
            BigInt {
                sign,
                digits: vec![digit],
            }
        }
    }

    /// Canonicalize a sign/magnitude pair into a value.
    pub(crate) fn from_magnitude(sign: bool, mut digits: Vec<Digit>) -> BigInt {
        arith::trim(&mut digits);
        debug_assert!(digits.len() <= MAX_LENGTH);
        BigInt {
            sign: sign && !digits.is_empty(),
            digits,
        }
    }

    /// Like [`from_magnitude`](Self::from_magnitude), for results that may
    /// have outgrown the maximum size.
    pub(crate) fn checked_magnitude(sign: bool, mut digits: Vec<Digit>) -> Result<BigInt> {
        arith::trim(&mut digits);
        if digits.len() > MAX_LENGTH {
            return Err(Error::size_exceeded());
        }
        Ok(BigInt {
            sign: sign && !digits.is_empty(),
            digits,
        })
    }

    /// Returns true if the value is `0`.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// The sign of the value: `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.sign {
            -1
        } else {
            1
        }
    }

    /// Number of bits in the magnitude; `0` for zero.
    pub fn bit_length(&self) -> usize {
        arith::bit_length(&self.digits)
    }

    /// Parse a string in an explicitly chosen radix.
    ///
    /// The radix must be in `2..=36`. A leading sign is only accepted for
    /// radix 10; a `0x`/`0X` prefix is accepted for radix 16. Leading and
    /// trailing whitespace are ignored.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        if !(2..=36).contains(&radix) {
            return Err(Error::invalid_radix(radix));
        }
        radix::parse(s, Some(radix)).map_err(|e| match e {
            ParseError::Syntax => Error::invalid_string(s),
            ParseError::TooBig => Error::size_exceeded(),
        })
    }

    /// Format the value in the given radix, `2..=36`. Digits beyond `9`
    /// are lowercase letters, and negative values get a leading `-`.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        if !(2..=36).contains(&radix) {
            return Err(Error::invalid_radix(radix));
        }
        Ok(radix::emit(self, radix))
    }

    // ARITHMETIC
    // ----------

    /// `self + other`.
    pub fn add(&self, other: &BigInt) -> Result<BigInt> {
        self.add_signed(other, other.sign)
    }

    /// `self - other`.
    pub fn subtract(&self, other: &BigInt) -> Result<BigInt> {
        self.add_signed(other, !other.sign)
    }

    /// Shared core of add/subtract: `self + (other_sign ? -1 : 1)·|other|`.
    fn add_signed(&self, other: &BigInt, other_sign: bool) -> Result<BigInt> {
        if self.sign == other_sign {
            return BigInt::checked_magnitude(self.sign, add::add(&self.digits, &other.digits));
        }
        match arith::compare(&self.digits, &other.digits) {
            Ordering::Equal => Ok(BigInt::zero()),
            Ordering::Greater => Ok(BigInt::from_magnitude(
                self.sign,
                add::sub(&self.digits, &other.digits),
            )),
            Ordering::Less => Ok(BigInt::from_magnitude(
                other_sign,
                add::sub(&other.digits, &self.digits),
            )),
        }
    }

    /// `self * other`.
    pub fn multiply(&self, other: &BigInt) -> Result<BigInt> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigInt::zero());
        }
        if self.digits.len() + other.digits.len() > MAX_LENGTH {
            return Err(Error::size_exceeded());
        }
        Ok(BigInt::from_magnitude(
            self.sign != other.sign,
            mul::mul(&self.digits, &other.digits),
        ))
    }

    /// `self / other`, truncated toward zero.
    pub fn divide(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        if arith::compare(&self.digits, &other.digits) == Ordering::Less {
            return Ok(BigInt::zero());
        }
        let sign = self.sign != other.sign;
        let quotient = match other.digits.as_slice() {
            [1] => self.digits.clone(),
            [d] if *d <= div::SMALL_DIVISOR_MAX => div::div_rem_small(&self.digits, *d).0,
            _ => div::div_rem_large(&self.digits, &other.digits, true, false)
                .0
                .unwrap(),
        };
        Ok(BigInt::from_magnitude(sign, quotient))
    }

    /// `self % other`; the result has the sign of `self`.
    pub fn remainder(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }
        if arith::compare(&self.digits, &other.digits) == Ordering::Less {
            return Ok(self.clone());
        }
        match other.digits.as_slice() {
            [1] => Ok(BigInt::zero()),
            [d] if *d <= div::SMALL_DIVISOR_MAX => Ok(BigInt::one_digit(
                div::rem_small(&self.digits, *d),
                self.sign,
            )),
            _ => {
                let remainder = div::div_rem_large(&self.digits, &other.digits, false, true)
                    .1
                    .unwrap();
                Ok(BigInt::from_magnitude(self.sign, remainder))
            }
        }
    }

    /// `self ** other`. The exponent must be non-negative and fit in one
    /// digit.
    pub fn exponentiate(&self, other: &BigInt) -> Result<BigInt> {
        if other.sign {
            return Err(Error::negative_exponent());
        }
        if other.is_zero() {
            return Ok(BigInt::one_digit(1, false));
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        if self.digits == [1] {
            // 1 and -1 never grow; -1 keeps its sign for odd exponents.
            return Ok(BigInt::one_digit(1, self.sign && other.digits[0] & 1 != 0));
        }
        if other.digits.len() > 1 {
            return Err(Error::size_exceeded());
        }
        let exponent = other.digits[0];
        if exponent == 1 {
            return Ok(self.clone());
        }
        if exponent >= MAX_LENGTH_BITS {
            return Err(Error::size_exceeded());
        }
        if self.digits == [2] {
            // 2^n is a single set bit.
            let digit_count = exponent as usize / DIGIT_BITS as usize + 1;
            if digit_count > MAX_LENGTH {
                return Err(Error::size_exceeded());
            }
            let mut digits = vec![0; digit_count];
            digits[digit_count - 1] = 1 << (exponent % DIGIT_BITS);
            return Ok(BigInt::from_magnitude(self.sign && exponent & 1 != 0, digits));
        }
        // Square-and-multiply over the exponent's bits, least significant
        // first; the running square starts as the base itself.
        let mut n = exponent;
        let mut running_square = self.clone();
        let mut result = if n & 1 != 0 { Some(self.clone()) } else { None };
        n >>= 1;
        while n != 0 {
            running_square = running_square.multiply(&running_square)?;
            if n & 1 != 0 {
                result = Some(match result {
                    None => running_square.clone(),
                    Some(acc) => acc.multiply(&running_square)?,
                });
            }
            n >>= 1;
        }
        Ok(result.unwrap())
    }

    /// `-self`.
    pub fn unary_minus(&self) -> BigInt {
        BigInt {
            sign: !self.sign && !self.is_zero(),
            digits: self.digits.clone(),
        }
    }

    // BITWISE
    // -------

    /// `~self`, which is `-(self + 1)`.
    pub fn bitwise_not(&self) -> Result<BigInt> {
        if self.sign {
            // ~(-x) == x - 1
            Ok(BigInt::from_magnitude(false, add::sub_one(&self.digits)))
        } else {
            BigInt::checked_magnitude(true, add::add_one(&self.digits))
        }
    }

    /// `self & other` on the infinite two's-complement bit strings.
    pub fn bitwise_and(&self, other: &BigInt) -> Result<BigInt> {
        let (x, y) = (&self.digits, &other.digits);
        match (self.sign, other.sign) {
            (false, false) => Ok(BigInt::from_magnitude(false, bitwise::and(x, y))),
            (true, true) => {
                // (-x) & (-y) == -(((x-1) | (y-1)) + 1)
                let merged = bitwise::or(&add::sub_one(x), &add::sub_one(y));
                BigInt::checked_magnitude(true, add::add_one(&merged))
            }
            // x & (-y) == x &~ (y-1)
            (false, true) => Ok(BigInt::from_magnitude(false, bitwise::and_not(x, &add::sub_one(y)))),
            (true, false) => Ok(BigInt::from_magnitude(false, bitwise::and_not(y, &add::sub_one(x)))),
        }
    }

    /// `self | other` on the infinite two's-complement bit strings.
    pub fn bitwise_or(&self, other: &BigInt) -> Result<BigInt> {
        let (x, y) = (&self.digits, &other.digits);
        match (self.sign, other.sign) {
            (false, false) => Ok(BigInt::from_magnitude(false, bitwise::or(x, y))),
            (true, true) => {
                // (-x) | (-y) == -(((x-1) & (y-1)) + 1)
                let merged = bitwise::and(&add::sub_one(x), &add::sub_one(y));
                Ok(BigInt::from_magnitude(true, add::add_one(&merged)))
            }
            // x | (-y) == -(((y-1) &~ x) + 1)
            (false, true) => {
                let masked = bitwise::and_not(&add::sub_one(y), x);
                Ok(BigInt::from_magnitude(true, add::add_one(&masked)))
            }
            (true, false) => {
                let masked = bitwise::and_not(&add::sub_one(x), y);
                Ok(BigInt::from_magnitude(true, add::add_one(&masked)))
            }
        }
    }

    /// `self ^ other` on the infinite two's-complement bit strings.
    pub fn bitwise_xor(&self, other: &BigInt) -> Result<BigInt> {
        let (x, y) = (&self.digits, &other.digits);
        match (self.sign, other.sign) {
            (false, false) => Ok(BigInt::from_magnitude(false, bitwise::xor(x, y))),
            // (-x) ^ (-y) == (x-1) ^ (y-1)
            (true, true) => Ok(BigInt::from_magnitude(
                false,
                bitwise::xor(&add::sub_one(x), &add::sub_one(y)),
            )),
            // x ^ (-y) == -((x ^ (y-1)) + 1)
            (false, true) => {
                let mixed = bitwise::xor(x, &add::sub_one(y));
                BigInt::checked_magnitude(true, add::add_one(&mixed))
            }
            (true, false) => {
                let mixed = bitwise::xor(y, &add::sub_one(x));
                BigInt::checked_magnitude(true, add::add_one(&mixed))
            }
        }
    }

    // SHIFTS
    // ------

    /// `self << other`. A negative `other` shifts right instead.
    pub fn left_shift(&self, other: &BigInt) -> Result<BigInt> {
        if other.sign {
            self.shift_right_by(other)
        } else {
            self.shift_left_by(other)
        }
    }

    /// `self >> other`, rounding toward negative infinity. A negative
    /// `other` shifts left instead.
    pub fn signed_right_shift(&self, other: &BigInt) -> Result<BigInt> {
        if other.sign {
            self.shift_left_by(other)
        } else {
            self.shift_right_by(other)
        }
    }

    /// `self >>> other` does not exist for BigInt; always a type error.
    pub fn unsigned_right_shift(&self, _other: &BigInt) -> Result<BigInt> {
        Err(Error::new(crate::error::ErrorCode::UnsignedRightShift))
    }

    fn shift_left_by(&self, amount: &BigInt) -> Result<BigInt> {
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let shift = match shift_amount(amount) {
            Some(shift) => shift,
            None => return Err(Error::size_exceeded()),
        };
        // Reject before allocating an oversized buffer.
        if self.digits.len() + shift / DIGIT_BITS as usize > MAX_LENGTH {
            return Err(Error::size_exceeded());
        }
        BigInt::checked_magnitude(self.sign, shift::shl(&self.digits, shift))
    }

    fn shift_right_by(&self, amount: &BigInt) -> Result<BigInt> {
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let (mut magnitude, lost) = match shift_amount(amount) {
            Some(shift) => shift::shr(&self.digits, shift),
            // Oversized shifts saturate: all bits gone, sign preserved.
            None => (Vec::new(), true),
        };
        if self.sign && lost {
            // Rounding toward negative infinity.
            magnitude = add::add_one(&magnitude);
        }
        Ok(BigInt::from_magnitude(self.sign, magnitude))
    }

    // WINDOWING
    // ---------

    /// Interpret `x` modulo `2^bits` as a signed two's-complement value in
    /// `[-2^(bits-1), 2^(bits-1))`.
    pub fn as_int_n(bits: u64, x: &BigInt) -> Result<BigInt> {
        if bits == 0 || x.is_zero() {
            return Ok(BigInt::zero());
        }
        if (x.bit_length() as u64) < bits {
            return Ok(x.clone());
        }
        let bits = bits as usize;
        let truncated = bitwise::truncate_to_bits(&x.digits, bits);
        if truncated.is_empty() {
            return Ok(BigInt::zero());
        }
        let top_bit = bitwise::bit_at(&truncated, bits - 1);
        if !x.sign {
            if top_bit {
                // The window's sign bit is set: value - 2^bits.
                Ok(BigInt::from_magnitude(
                    true,
                    bitwise::sub_from_power_of_two(&truncated, bits),
                ))
            } else {
                Ok(BigInt::from_magnitude(false, truncated))
            }
        } else if !top_bit || !bitwise::low_bits_zero(&truncated, bits - 1) {
            if top_bit {
                // -|x| maps above the sign bit: 2^bits - window.
                Ok(BigInt::from_magnitude(
                    false,
                    bitwise::sub_from_power_of_two(&truncated, bits),
                ))
            } else {
                Ok(BigInt::from_magnitude(true, truncated))
            }
        } else {
            // The window is exactly 2^(bits-1): the negative edge value.
            Ok(BigInt::from_magnitude(true, truncated))
        }
    }

    /// Interpret `x` modulo `2^bits` as an unsigned value in `[0, 2^bits)`.
    pub fn as_uint_n(bits: u64, x: &BigInt) -> Result<BigInt> {
        if bits == 0 || x.is_zero() {
            return Ok(BigInt::zero());
        }
        if !x.sign {
            if (x.bit_length() as u64) <= bits {
                return Ok(x.clone());
            }
            return Ok(BigInt::from_magnitude(
                false,
                bitwise::truncate_to_bits(&x.digits, bits as usize),
            ));
        }
        // Negative values complement to bits-sized magnitudes, so huge
        // windows cannot be represented.
        if bits >= MAX_LENGTH_BITS as u64 {
            return Err(Error::size_exceeded());
        }
        let bits = bits as usize;
        let truncated = bitwise::truncate_to_bits(&x.digits, bits);
        if truncated.is_empty() {
            return Ok(BigInt::zero());
        }
        BigInt::checked_magnitude(false, bitwise::sub_from_power_of_two(&truncated, bits))
    }

    // CONVERSIONS
    // -----------

    /// Round to the nearest `f64`, ties to even; saturates to infinity
    /// beyond the `f64` exponent range.
    pub fn to_f64(&self) -> f64 {
        double::to_f64(self)
    }

    /// Compare with an `f64` numerically. `None` iff `other` is NaN.
    pub fn compare_f64(&self, other: f64) -> Option<Ordering> {
        double::compare_f64(self, other)
    }

    /// The low 64 bits of the value in two's complement.
    pub fn to_u64_wrapping(&self) -> u64 {
        let mut bits = 0u64;
        for (i, &d) in self.digits.iter().take(3).enumerate() {
            bits |= (d as u64) << (i as u32 * DIGIT_BITS);
        }
        if self.sign {
            bits.wrapping_neg()
        } else {
            bits
        }
    }

    pub(crate) fn from_u64(value: u64) -> BigInt {
        let digits = vec![
            (value & DIGIT_MASK as u64) as Digit,
            ((value >> DIGIT_BITS) & DIGIT_MASK as u64) as Digit,
            (value >> (2 * DIGIT_BITS)) as Digit,
        ];
        BigInt::from_magnitude(false, digits)
    }
}

/// Decode a shift amount. `None` means the amount overflows the maximum
/// size (more than one digit).
fn shift_amount(amount: &BigInt) -> Option<usize> {
    match amount.digits.as_slice() {
        [] => Some(0),
        [d] => Some(*d as usize),
        _ => None,
    }
}

// TRAITS
// ------

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => arith::compare(&self.digits, &other.digits),
            (true, true) => arith::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&radix::emit(self, 10))
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse with radix auto-detection: optional sign for decimal, or a
    /// `0x`/`0o`/`0b` prefix. Empty and whitespace-only input is zero.
    fn from_str(s: &str) -> Result<BigInt> {
        radix::parse(s, None).map_err(|e| match e {
            ParseError::Syntax => Error::invalid_string(s),
            ParseError::TooBig => Error::size_exceeded(),
        })
    }
}

impl From<bool> for BigInt {
    fn from(value: bool) -> BigInt {
        BigInt::one_digit(value as Digit, false)
    }
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    BigInt::from_u64(value as u64)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    let magnitude = BigInt::from_u64(value.unsigned_abs() as u64);
                    BigInt {
                        sign: value < 0,
                        digits: magnitude.digits,
                    }
                }
            }
        )*
    };
}

from_unsigned! { u8 u16 u32 u64 usize }
from_signed! { i8 i16 i32 i64 isize }

impl TryFrom<f64> for BigInt {
    type Error = Error;

    fn try_from(value: f64) -> Result<BigInt> {
        double::from_f64(value)
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<u64> {
        if value.sign || value.bit_length() > 64 {
            return Err(Error::out_of_range());
        }
        Ok(value.to_u64_wrapping())
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<i64> {
        if value.bit_length() > 64 {
            return Err(Error::out_of_range());
        }
        let bits = value.to_u64_wrapping();
        if value.sign {
            // A magnitude above 2^63 wraps into the non-negative half.
            if bits < (1u64 << 63) {
                return Err(Error::out_of_range());
            }
            Ok(bits as i64)
        } else {
            i64::try_from(bits).map_err(|_| Error::out_of_range())
        }
    }
}

// Heterogeneous comparisons against host primitives.
macro_rules! partial_eq_primitive {
    ($([$($ty:ty)*], $via:ty)*) => {
        $($(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInt::from(*other as $via)
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    BigInt::from(*self as $via) == *other
                }
            }

            impl PartialOrd<$ty> for BigInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.cmp(&BigInt::from(*other as $via)))
                }
            }

            impl PartialOrd<BigInt> for $ty {
                fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                    Some(BigInt::from(*self as $via).cmp(other))
                }
            }
        )*)*
    };
}

partial_eq_primitive! {
    [i8 i16 i32 i64], i64
    [u8 u16 u32 u64], u64
}

impl PartialEq<f64> for BigInt {
    fn eq(&self, other: &f64) -> bool {
        self.compare_f64(*other) == Some(Ordering::Equal)
    }
}

impl PartialEq<BigInt> for f64 {
    fn eq(&self, other: &BigInt) -> bool {
        other.compare_f64(*self) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for BigInt {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.compare_f64(*other)
    }
}

impl PartialOrd<BigInt> for f64 {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        other.compare_f64(*self).map(Ordering::reverse)
    }
}

// SERDE
// -----

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> core::result::Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or integer")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<BigInt, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }

            fn visit_i64<E>(self, value: i64) -> core::result::Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> core::result::Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn from_primitive_test() {
        assert_eq!(BigInt::from(0u32), BigInt::zero());
        assert_eq!(BigInt::from(true).to_string(), "1");
        assert_eq!(BigInt::from(-1i32).to_string(), "-1");
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn add_sub_sign_test() {
        let a = big("1000000000000000000000");
        let b = big("-999999999999999999999");
        assert_eq!(a.add(&b).unwrap().to_string(), "1");
        assert_eq!(b.add(&a).unwrap().to_string(), "1");
        assert_eq!(a.subtract(&a).unwrap(), BigInt::zero());
        assert_eq!(b.subtract(&a).unwrap().to_string(), "-1999999999999999999999");
        assert_eq!(a.add(&a.unary_minus()).unwrap(), BigInt::zero());
    }

    #[test]
    fn divide_remainder_sign_test() {
        let a = big("-7");
        let b = big("2");
        assert_eq!(a.divide(&b).unwrap().to_string(), "-3");
        assert_eq!(a.remainder(&b).unwrap().to_string(), "-1");
        assert_eq!(big("7").divide(&big("-2")).unwrap().to_string(), "-3");
        assert_eq!(big("7").remainder(&big("-2")).unwrap().to_string(), "1");
        assert!(a.divide(&BigInt::zero()).unwrap_err().is_range());
    }

    #[test]
    fn exponentiate_test() {
        assert_eq!(big("2").exponentiate(&big("10")).unwrap().to_string(), "1024");
        assert_eq!(big("-1").exponentiate(&big("101")).unwrap().to_string(), "-1");
        assert_eq!(big("-1").exponentiate(&big("100")).unwrap().to_string(), "1");
        assert_eq!(big("0").exponentiate(&big("0")).unwrap().to_string(), "1");
        assert_eq!(big("3").exponentiate(&big("5")).unwrap().to_string(), "243");
        assert_eq!(big("-2").exponentiate(&big("3")).unwrap().to_string(), "-8");
        assert!(big("2").exponentiate(&big("-1")).unwrap_err().is_range());
    }

    #[test]
    fn as_int_n_test() {
        assert_eq!(BigInt::as_int_n(8, &big("255")).unwrap().to_string(), "-1");
        assert_eq!(BigInt::as_int_n(8, &big("128")).unwrap().to_string(), "-128");
        assert_eq!(BigInt::as_int_n(8, &big("127")).unwrap().to_string(), "127");
        assert_eq!(BigInt::as_int_n(8, &big("-129")).unwrap().to_string(), "127");
        assert_eq!(BigInt::as_int_n(8, &big("-128")).unwrap().to_string(), "-128");
        assert_eq!(BigInt::as_int_n(8, &big("256")).unwrap(), BigInt::zero());
        assert_eq!(BigInt::as_int_n(0, &big("77")).unwrap(), BigInt::zero());
        // Window wider than the value.
        assert_eq!(BigInt::as_int_n(200, &big("-77")).unwrap().to_string(), "-77");
    }

    #[test]
    fn as_uint_n_test() {
        assert_eq!(BigInt::as_uint_n(8, &big("-1")).unwrap().to_string(), "255");
        assert_eq!(BigInt::as_uint_n(8, &big("256")).unwrap(), BigInt::zero());
        assert_eq!(BigInt::as_uint_n(8, &big("257")).unwrap().to_string(), "1");
        assert_eq!(BigInt::as_uint_n(64, &big("-1")).unwrap().to_string(), "18446744073709551615");
        assert_eq!(BigInt::as_uint_n(3, &big("-9")).unwrap().to_string(), "7");
        assert!(BigInt::as_uint_n(1 << 30, &big("-1")).unwrap_err().is_range());
    }

    #[test]
    fn ord_test() {
        let mut values = vec![big("5"), big("-5"), big("0"), big("100000000000000000000"), big("-6")];
        values.sort();
        let rendered: Vec<String> = values.iter().map(BigInt::to_string).collect();
        assert_eq!(rendered, ["-6", "-5", "0", "5", "100000000000000000000"]);
    }

    #[test]
    fn primitive_compare_test() {
        assert_eq!(big("5"), 5i64);
        assert_eq!(5u8, big("5"));
        assert!(big("5") > 4.5);
        assert!(big("-5") < -4.9);
        assert_eq!(big("5"), 5.0);
        assert!(big("5").partial_cmp(&f64::NAN).is_none());
    }

    #[test]
    fn try_into_test() {
        assert_eq!(u64::try_from(&big("18446744073709551615")).unwrap(), u64::MAX);
        assert!(u64::try_from(&big("18446744073709551616")).is_err());
        assert!(u64::try_from(&big("-1")).is_err());
        assert_eq!(i64::try_from(&big("-9223372036854775808")).unwrap(), i64::MIN);
        assert!(i64::try_from(&big("-9223372036854775809")).is_err());
        assert_eq!(i64::try_from(&big("9223372036854775807")).unwrap(), i64::MAX);
        assert!(i64::try_from(&big("9223372036854775808")).is_err());
    }

    #[test]
    fn to_u64_wrapping_test() {
        assert_eq!(big("-1").to_u64_wrapping(), u64::MAX);
        assert_eq!(big("18446744073709551615").to_u64_wrapping(), u64::MAX);
        assert_eq!(big("18446744073709551616").to_u64_wrapping(), 0);
        assert_eq!(big("-9223372036854775808").to_u64_wrapping(), 1 << 63);
    }
}
