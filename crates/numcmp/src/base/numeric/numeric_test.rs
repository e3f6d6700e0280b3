use super::{Numeric, NumericError, NumericSign};
use bigdecimal::BigDecimal;
use core::str::FromStr;

#[test]
fn we_can_build_numerics_from_decimal_text() {
    let value = Numeric::from_str("123.45").unwrap();
    assert_eq!(value.sign(), NumericSign::Positive);
    assert_eq!(value.weight(), 0);
    assert_eq!(value.dscale(), 2);
    assert_eq!(value.digits(), &[123, 4500]);

    let value = Numeric::from_str("-0.00001").unwrap();
    assert_eq!(value.sign(), NumericSign::Negative);
    assert_eq!(value.weight(), -2);
    assert_eq!(value.digits(), &[1000]);

    let value = Numeric::from_str("12e3").unwrap();
    assert_eq!(value.weight(), 1);
    assert_eq!(value.digits(), &[1, 2000]);
}

#[test]
fn we_can_build_numerics_from_integers() {
    let value = Numeric::from(10_000);
    assert_eq!(value.weight(), 1);
    assert_eq!(value.digits(), &[1]);

    let value = Numeric::from(i64::MIN);
    assert_eq!(value.sign(), NumericSign::Negative);
    assert_eq!(value.weight(), 4);
    assert_eq!(value.digits(), &[922, 3372, 368, 5477, 5808]);

    assert_eq!(Numeric::from(0), Numeric::zero());
    assert!(Numeric::zero().digits().is_empty());
}

#[test]
fn we_can_read_special_spellings() {
    assert!(Numeric::from_str("NaN").unwrap().is_nan());
    assert_eq!(
        Numeric::from_str(" infinity ").unwrap(),
        Numeric::positive_infinity()
    );
    assert_eq!(Numeric::from_str("+Inf").unwrap(), Numeric::positive_infinity());
    assert_eq!(
        Numeric::from_str("-Infinity").unwrap(),
        Numeric::negative_infinity()
    );
}

#[test]
fn we_can_display_numerics() {
    for text in ["123.45", "-0.00001", "10000", "0", "-9223372036854775808"] {
        assert_eq!(Numeric::from_str(text).unwrap().to_string(), text);
    }
    assert_eq!(Numeric::nan().to_string(), "NaN");
    assert_eq!(Numeric::negative_infinity().to_string(), "-Infinity");
}

#[test]
fn we_can_convert_numerics_to_big_decimals() {
    let value = Numeric::try_new(NumericSign::Positive, 2, 0, vec![7]).unwrap();
    assert_eq!(
        value.to_big_decimal(),
        Some(BigDecimal::from_str("700000000").unwrap())
    );
    let value = Numeric::try_from(&BigDecimal::from_str("-42.125").unwrap()).unwrap();
    assert_eq!(
        value.to_big_decimal(),
        Some(BigDecimal::from_str("-42.125").unwrap())
    );
    assert_eq!(Numeric::positive_infinity().to_big_decimal(), None);
}

#[test]
fn we_cannot_build_numerics_with_invalid_digits() {
    assert_eq!(
        Numeric::try_new(NumericSign::Positive, 0, 0, vec![1, 10_000]),
        Err(NumericError::InvalidDigit {
            digit: 10_000,
            position: 1
        })
    );
    assert_eq!(
        Numeric::try_new(NumericSign::Negative, 0, 0, vec![-1]),
        Err(NumericError::InvalidDigit {
            digit: -1,
            position: 0
        })
    );
    assert_eq!(
        Numeric::try_new(NumericSign::NaN, 0, 0, vec![1]),
        Err(NumericError::SpecialWithDigits)
    );
}

#[test]
fn we_cannot_build_numerics_beyond_host_limits() {
    assert_eq!(
        Numeric::from_str("1e-16384"),
        Err(NumericError::ScaleOutOfRange { scale: 16384 })
    );
    assert!(matches!(
        Numeric::from_str("1e140000"),
        Err(NumericError::WeightOutOfRange { .. })
    ));
    assert_eq!(
        Numeric::from_str("1e131072"),
        Err(NumericError::WeightOutOfRange { weight: 32768 })
    );
    assert_eq!(
        Numeric::from_str("1e20000000"),
        Err(NumericError::WeightOutOfRange { weight: 5_000_000 })
    );
    assert!(matches!(
        Numeric::from_str("ten"),
        Err(NumericError::InvalidText { .. })
    ));
}

#[test]
fn we_can_build_numerics_from_large_exponents() {
    let thousand_digits = Numeric::from_str("1e4000").unwrap();
    assert_eq!(thousand_digits.weight(), 1000);
    assert_eq!(thousand_digits.digits(), &[1]);
    assert_eq!(Numeric::from_str("0e20000000").unwrap(), Numeric::zero());
    let largest = Numeric::from_str("9e131071").unwrap();
    assert_eq!(largest.weight(), i16::MAX);
    assert_eq!(largest.digits(), &[9000]);
}
