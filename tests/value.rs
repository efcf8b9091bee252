use ecma_bigint::{BigInt, Value};

fn big(s: &str) -> Value {
    Value::BigInt(s.parse().unwrap())
}

#[test]
fn loose_equality_matrix() {
    let one_big = big("1");
    let one_num = Value::Number(1.0);
    let one_str = Value::String("1".to_owned());
    assert!(one_big.loose_eq(&one_num));
    assert!(one_big.loose_eq(&one_str));
    assert!(one_num.loose_eq(&one_str));
    assert!(one_big.loose_eq(&Value::Bool(true)));
    assert!(one_big.loose_ne(&Value::Null));
    assert!(one_big.loose_ne(&Value::Undefined));
    assert!(Value::Null.loose_eq(&Value::Undefined));
    assert!(!Value::Null.loose_eq(&Value::Number(0.0)));
    assert!(big("-0").loose_eq(&Value::Number(-0.0)));
    // String operands coerce through number conversion on both sides.
    assert!(big("10").loose_eq(&Value::String("1e1".to_owned())));
    assert!(big("16").loose_eq(&Value::String("0x10".to_owned())));
    assert!(big("1").loose_ne(&Value::String("1n".to_owned())));
}

#[test]
fn relational_operators() {
    assert!(big("2").lt(&Value::Number(2.5)));
    assert!(big("3").gt(&Value::Number(2.5)));
    assert!(big("2").le(&Value::String("2".to_owned())));
    assert!(Value::Number(2.0).ge(&big("2")));
    assert!(Value::String("b".to_owned()).lt(&Value::String("c".to_owned())));
    // NaN poisons every relational operator.
    for op_result in [
        big("1").lt(&Value::Undefined),
        big("1").le(&Value::Undefined),
        big("1").gt(&Value::Undefined),
        big("1").ge(&Value::Undefined),
    ] {
        assert!(!op_result);
    }
}

#[test]
fn addition_dispatch() {
    // BigInt + BigInt stays big.
    let sum = big("9007199254740991").add(&big("2")).unwrap();
    assert_eq!(sum, big("9007199254740993"));
    // Number + Number stays double.
    assert_eq!(
        Value::Number(0.5).add(&Value::Number(0.25)).unwrap(),
        Value::Number(0.75)
    );
    // Strings concatenate with anything.
    assert_eq!(
        Value::String("n = ".to_owned()).add(&big("5")).unwrap(),
        Value::String("n = 5".to_owned())
    );
    assert_eq!(
        big("5").add(&Value::String("!".to_owned())).unwrap(),
        Value::String("5!".to_owned())
    );
    // BigInt with anything numeric is the mixing type error.
    for rhs in [
        Value::Number(1.0),
        Value::Bool(true),
        Value::Null,
        Value::Undefined,
    ] {
        let err = big("1").add(&rhs).unwrap_err();
        assert!(err.is_type());
        assert_eq!(
            err.to_string(),
            "Cannot mix BigInt and other types, use explicit conversions"
        );
    }
}

#[test]
fn serde_round_trip() {
    use serde_test::{assert_tokens, Token};

    let x: BigInt = "-340282366920938463463374607431768211455".parse().unwrap();
    assert_tokens(
        &x,
        &[Token::Str("-340282366920938463463374607431768211455")],
    );
    assert_tokens(&BigInt::default(), &[Token::Str("0")]);
}
