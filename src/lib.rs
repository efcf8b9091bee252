//! Arbitrary-precision signed integers with ECMAScript BigInt semantics.
//!
//! This crate provides a [`BigInt`] type that reproduces the arithmetic a
//! JavaScript engine exposes through its native `BigInt`: sign-magnitude
//! values over 30-bit digits, truncating division, two's-complement
//! bitwise operators, `asIntN`/`asUintN` windowing, radix 2-36 string
//! conversion, and exact conversion and comparison against IEEE-754
//! doubles.
//!
//! ```
//! use ecma_bigint::BigInt;
//!
//! let base: BigInt = "2".parse().unwrap();
//! let exponent = BigInt::from(100u32);
//! let value = base.exponentiate(&exponent).unwrap();
//! assert_eq!(value.to_string(), "1267650600228229401496703205376");
//! assert_eq!(value.to_string_radix(16).unwrap(), "10000000000000000000000000");
//! ```
//!
//! Operations that can exceed a limit return a [`Result`]; the error's
//! [`classify`](Error::classify) mirrors which host exception class
//! (range, syntax or type error) the condition corresponds to.
//!
//! The [`Value`] enum carries the loose `==`, `<` and `+` operators over
//! heterogeneous primitives, including the "Cannot mix BigInt and other
//! types" rule:
//!
//! ```
//! use ecma_bigint::Value;
//!
//! let x = Value::BigInt("10".parse().unwrap());
//! assert!(x.loose_eq(&Value::String("0xa".to_owned())));
//! assert!(x.add(&Value::Number(1.0)).unwrap_err().is_type());
//! ```
//!
//! The [`dataview`] module reads and writes 64-bit slots in caller byte
//! buffers with explicit endianness, wrapping stored values modulo 2^64
//! the way `DataView.prototype.setBigInt64` does.

#![deny(missing_docs)]

mod arith;
mod bigint;
pub mod dataview;
mod double;
mod error;
mod radix;
mod value;

pub use crate::bigint::{BigInt, MAX_LENGTH, MAX_LENGTH_BITS};
pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::value::Value;
