//! When a BigInt operation goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

/// This type represents all possible errors that can occur when
/// constructing or operating on a `BigInt`.
pub struct Error {
    /// This `Box` keeps the size of `Error` down to one pointer. Almost
    /// every operation returns `Result<BigInt, Error>`, and the happy path
    /// should not pay for the error payload.
    err: Box<ErrorCode>,
}

/// Alias for a `Result` with the error type `ecma_bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Range` - a numeric limit was exceeded
    /// - `Category::Syntax` - a numeric string was malformed
    /// - `Category::Type` - operands of incompatible types were mixed
    pub fn classify(&self) -> Category {
        match *self.err {
            ErrorCode::DivisionByZero
            | ErrorCode::NegativeExponent
            | ErrorCode::SizeExceeded
            | ErrorCode::InvalidRadix(_)
            | ErrorCode::NotAnInteger(_)
            | ErrorCode::OutOfRange
            | ErrorCode::OutOfBounds => Category::Range,
            ErrorCode::InvalidBigIntString(_) => Category::Syntax,
            ErrorCode::MixedTypes | ErrorCode::UnsignedRightShift => Category::Type,
        }
    }

    /// Returns true if this error corresponds to a host `RangeError`.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if this error corresponds to a host `SyntaxError`.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error corresponds to a host `TypeError`.
    pub fn is_type(&self) -> bool {
        self.classify() == Category::Type
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(code),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error::new(ErrorCode::DivisionByZero)
    }

    #[cold]
    pub(crate) fn negative_exponent() -> Self {
        Error::new(ErrorCode::NegativeExponent)
    }

    #[cold]
    pub(crate) fn size_exceeded() -> Self {
        Error::new(ErrorCode::SizeExceeded)
    }

    #[cold]
    pub(crate) fn invalid_radix(radix: u32) -> Self {
        Error::new(ErrorCode::InvalidRadix(radix))
    }

    #[cold]
    pub(crate) fn not_an_integer(value: f64) -> Self {
        Error::new(ErrorCode::NotAnInteger(value))
    }

    #[cold]
    pub(crate) fn invalid_string(s: &str) -> Self {
        Error::new(ErrorCode::InvalidBigIntString(s.into()))
    }

    #[cold]
    pub(crate) fn mixed_types() -> Self {
        Error::new(ErrorCode::MixedTypes)
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error::new(ErrorCode::OutOfRange)
    }

    #[cold]
    pub(crate) fn out_of_bounds() -> Self {
        Error::new(ErrorCode::OutOfBounds)
    }
}

/// Categorizes the cause of an `ecma_bigint::Error`, mirroring which host
/// exception class the condition maps to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error corresponds to a `RangeError`: a numeric limit was
    /// exceeded (division by zero, oversized result, bad radix, ...).
    Range,

    /// The error corresponds to a `SyntaxError`: a numeric string did not
    /// match the BigInt grammar.
    Syntax,

    /// The error corresponds to a `TypeError`: operands of incompatible
    /// types were mixed, or an unsupported operator was requested.
    Type,
}

/// This type describes all possible errors that can occur when operating
/// on a `BigInt`.
#[derive(Clone, PartialEq)]
pub enum ErrorCode {
    /// Division or remainder by zero.
    DivisionByZero,

    /// Exponentiation with a negative exponent.
    NegativeExponent,

    /// The result would exceed the maximum BigInt size.
    SizeExceeded,

    /// Radix outside the supported 2..=36 range.
    InvalidRadix(u32),

    /// A double that is NaN, infinite, or has a fractional part.
    NotAnInteger(f64),

    /// A string that does not match the BigInt grammar.
    InvalidBigIntString(Box<str>),

    /// BigInt and Number operands mixed in arithmetic.
    MixedTypes,

    /// The unsigned right shift operator is not defined for BigInt.
    UnsignedRightShift,

    /// A conversion to a fixed-width integer did not fit.
    OutOfRange,

    /// A DataView-style access fell outside the buffer.
    OutOfBounds,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DivisionByZero => f.write_str("Division by zero"),
            ErrorCode::NegativeExponent => f.write_str("Exponent must be non-negative"),
            ErrorCode::SizeExceeded => f.write_str("Maximum BigInt size exceeded"),
            ErrorCode::InvalidRadix(radix) => f.write_fmt(format_args!(
                "toString() radix must be in the range 2-36, got {}",
                radix
            )),
            ErrorCode::NotAnInteger(value) => f.write_fmt(format_args!(
                "The number {} cannot be converted to a BigInt because it is not an integer",
                value
            )),
            ErrorCode::InvalidBigIntString(s) => {
                f.write_fmt(format_args!("Cannot convert {} to a BigInt", s))
            }
            ErrorCode::MixedTypes => {
                f.write_str("Cannot mix BigInt and other types, use explicit conversions")
            }
            ErrorCode::UnsignedRightShift => {
                f.write_str("BigInts have no unsigned right shift, use >> instead")
            }
            ErrorCode::OutOfRange => f.write_str("BigInt out of range"),
            ErrorCode::OutOfBounds => {
                f.write_str("Offset is outside the bounds of the DataView")
            }
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.to_string())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.err == other.err
    }
}

// TESTS
// -----
