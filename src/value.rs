//! Loose operations over heterogeneous primitive values.
//!
//! `Value` models the primitive operands the abstract `==`, `<` and `+`
//! operators accept once object-to-primitive coercion has already
//! happened. The coercion ladder is the standard one: strings stay
//! strings for concatenation and code-point comparison, booleans decay to
//! numbers, and a BigInt meets a Number only through exact mathematical
//! comparison, never through arithmetic.

use core::cmp::Ordering;

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::radix;

/// A primitive operand for the loose operators.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
}

/// Either side of a numeric operation after `ToNumeric`.
enum Numeric {
    Number(f64),
    BigInt(BigInt),
}

impl Value {
    // EQUALITY
    // --------

    /// Abstract (loose) equality.
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Undefined | Null, Undefined | Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (String(a), String(b)) => a == b,
            (BigInt(a), BigInt(b)) => a == b,
            (Number(n), String(s)) | (String(s), Number(n)) => *n == string_to_number(s),
            (BigInt(x), String(s)) | (String(s), BigInt(x)) => {
                x.compare_f64(string_to_number(s)) == Some(Ordering::Equal)
            }
            (BigInt(x), Number(n)) | (Number(n), BigInt(x)) => {
                x.compare_f64(*n) == Some(Ordering::Equal)
            }
            (Bool(b), v) | (v, Bool(b)) => Number(*b as u8 as f64).loose_eq(v),
            _ => false,
        }
    }

    /// Abstract inequality.
    pub fn loose_ne(&self, other: &Value) -> bool {
        !self.loose_eq(other)
    }

    // RELATIONAL
    // ----------

    /// Abstract relational comparison. `None` means unordered: some
    /// operand coerced to NaN, and every relational operator is false.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if let (Value::String(a), Value::String(b)) = (self, other) {
            return Some(a.cmp(b));
        }
        match (self.to_numeric(), other.to_numeric()) {
            (Numeric::Number(a), Numeric::Number(b)) => a.partial_cmp(&b),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Some(a.cmp(&b)),
            (Numeric::BigInt(a), Numeric::Number(b)) => a.compare_f64(b),
            (Numeric::Number(a), Numeric::BigInt(b)) => {
                b.compare_f64(a).map(Ordering::reverse)
            }
        }
    }

    /// `self < other`.
    pub fn lt(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// `self <= other`.
    pub fn le(&self, other: &Value) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    /// `self > other`.
    pub fn gt(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    /// `self >= other`.
    pub fn ge(&self, other: &Value) -> bool {
        matches!(
            self.compare(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    // ADDITION
    // --------

    /// The abstract `+` operator: string concatenation when either side
    /// is a string, otherwise numeric addition. BigInt and Number do not
    /// mix.
    pub fn add(&self, other: &Value) -> Result<Value> {
        if matches!(self, Value::String(_)) || matches!(other, Value::String(_)) {
            let mut joined = self.to_js_string();
            joined.push_str(&other.to_js_string());
            return Ok(Value::String(joined));
        }
        match (self.to_numeric(), other.to_numeric()) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(a + b)),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => a.add(&b).map(Value::BigInt),
            _ => Err(Error::mixed_types()),
        }
    }

    // COERCIONS
    // ---------

    /// `ToNumeric`: a BigInt stays big, everything else becomes a number.
    fn to_numeric(&self) -> Numeric {
        match self {
            Value::BigInt(x) => Numeric::BigInt(x.clone()),
            Value::Undefined => Numeric::Number(f64::NAN),
            Value::Null => Numeric::Number(0.0),
            Value::Bool(b) => Numeric::Number(*b as u8 as f64),
            Value::Number(n) => Numeric::Number(*n),
            Value::String(s) => Numeric::Number(string_to_number(s)),
        }
    }

    /// `ToString` for primitives.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_owned(),
            Value::Null => "null".to_owned(),
            Value::Bool(true) => "true".to_owned(),
            Value::Bool(false) => "false".to_owned(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.clone(),
            Value::BigInt(x) => x.to_string(),
        }
    }
}

// NUMBER <-> STRING
// -----------------

/// `ToString` applied to a number: integers print without a decimal
/// point, everything else is the shortest round-trip form.
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-Infinity" } else { "Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.fract() == 0.0 && n.abs() < 1e21 {
        if n.abs() < 9007199254740992.0 {
            return itoa::Buffer::new().format(n as i64).to_owned();
        }
        // Integral but beyond 2^53: exact digits via the big integer.
        return BigInt::try_from(n).unwrap().to_string();
    }
    ryu::Buffer::new().format(n).to_owned()
}

/// `ToNumber` applied to a string.
fn string_to_number(s: &str) -> f64 {
    let t = s.trim_matches(char::is_whitespace);
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix_literal = t.len() > 2
        && t.starts_with('0')
        && matches!(t.as_bytes()[1], b'x' | b'X' | b'o' | b'O' | b'b' | b'B');
    if radix_literal {
        return match radix::parse(t, None) {
            Ok(parsed) => parsed.to_f64(),
            Err(_) => f64::NAN,
        };
    }
    // The host float parser also accepts words like "inf"; the numeric
    // grammar here only ever contains digits, sign, dot and exponent.
    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    t.parse().unwrap_or(f64::NAN)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> Value {
        Value::BigInt(s.parse().unwrap())
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn string(s: &str) -> Value {
        Value::String(s.to_owned())
    }

    #[test]
    fn loose_eq_test() {
        assert!(Value::Null.loose_eq(&Value::Undefined));
        assert!(!Value::Null.loose_eq(&num(0.0)));
        assert!(big("1").loose_eq(&num(1.0)));
        assert!(!big("1").loose_eq(&num(1.5)));
        assert!(big("10").loose_eq(&string("10")));
        assert!(big("255").loose_eq(&string("0xff")));
        assert!(!big("10").loose_eq(&string("10.5")));
        assert!(!num(10.0).loose_eq(&string("10.5")));
        assert!(num(10.5).loose_eq(&string("10.5")));
        assert!(Value::Bool(true).loose_eq(&num(1.0)));
        assert!(Value::Bool(true).loose_eq(&big("1")));
        assert!(!num(f64::NAN).loose_eq(&num(f64::NAN)));
        assert!(!big("1").loose_eq(&string("pear")));
        // 2^53 + 1 is not equal to the double it rounds to, and a string
        // operand goes through the same number coercion.
        assert!(!big("9007199254740993").loose_eq(&num(9007199254740992.0)));
        assert!(!big("9007199254740993").loose_eq(&string("9007199254740993")));
        assert!(big("9007199254740992").loose_eq(&string("9007199254740993")));
    }

    #[test]
    fn compare_test() {
        assert!(big("5").lt(&num(5.5)));
        assert!(big("6").gt(&num(5.5)));
        assert!(big("5").le(&num(5.0)));
        assert!(big("5").ge(&string("4")));
        assert!(string("abc").lt(&string("abd")));
        // Both strings: code point order, not numeric.
        assert!(string("10").lt(&string("9")));
        // String against a number goes numeric.
        assert!(string("10").gt(&num(9.0)));
        // NaN is unordered against everything.
        assert!(!big("5").lt(&Value::Undefined));
        assert!(!big("5").ge(&Value::Undefined));
        assert!(!num(f64::NAN).le(&num(f64::NAN)));
        assert!(Value::Null.ge(&num(0.0)));
    }

    #[test]
    fn add_test() {
        assert_eq!(
            big("3").add(&big("4")).unwrap(),
            Value::BigInt("7".parse().unwrap())
        );
        assert_eq!(num(1.5).add(&num(2.0)).unwrap(), num(3.5));
        assert_eq!(
            string("x").add(&big("1")).unwrap(),
            string("x1")
        );
        assert_eq!(big("1").add(&string("2")).unwrap(), string("12"));
        assert_eq!(num(1.0).add(&string("2")).unwrap(), string("12"));
        assert_eq!(Value::Null.add(&num(1.0)).unwrap(), num(1.0));
        let nan_sum = Value::Undefined.add(&num(1.0)).unwrap();
        assert!(matches!(nan_sum, Value::Number(n) if n.is_nan()));
        // The signature mixing error.
        assert!(big("1").add(&num(1.0)).unwrap_err().is_type());
        assert!(Value::Bool(true).add(&big("1")).unwrap_err().is_type());
    }

    #[test]
    fn number_to_string_test() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-42.0), "-42");
        assert_eq!(number_to_string(1.5), "1.5");
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(1e19), "10000000000000000000");
    }

    #[test]
    fn string_to_number_test() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("  12  "), 12.0);
        assert_eq!(string_to_number("1.5e3"), 1500.0);
        assert_eq!(string_to_number("0x10"), 16.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("NaN ").is_nan());
    }
}
