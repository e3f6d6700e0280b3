use super::{compare, compare_i64};
use crate::base::{
    decode::{decode_f32, decode_f64, decode_numeric, DecodedNumeric},
    numeric::Numeric,
};
use bigdecimal::BigDecimal;
use core::{cmp::Ordering, str::FromStr};
use numcmp_parser::intermediate_ast::ComparisonOperator;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn numeric(text: &str) -> DecodedNumeric {
    decode_numeric(&Numeric::from_str(text).unwrap())
}

#[test]
fn we_can_compare_integers_against_fractional_numerics() {
    assert_eq!(compare(10_i32, &numeric("10.5")).ordering(), Ordering::Less);
    assert_eq!(compare(11_i32, &numeric("10.5")).ordering(), Ordering::Greater);
    assert_eq!(compare(-10_i32, &numeric("-10.5")).ordering(), Ordering::Greater);
    assert_eq!(compare(-11_i32, &numeric("-10.5")).ordering(), Ordering::Less);
    assert_eq!(compare(0_i16, &numeric("0.5")).ordering(), Ordering::Less);
    assert_eq!(compare(0_i16, &numeric("-0.5")).ordering(), Ordering::Greater);
    assert_eq!(compare(-1_i16, &numeric("-0.5")).ordering(), Ordering::Less);
}

#[test]
fn we_can_compare_integers_against_integral_numerics() {
    let outcome = compare(10_i64, &numeric("10.000"));
    assert_eq!(outcome.ordering(), Ordering::Equal);
    assert!(outcome.exact_integer_equal());
    assert!(outcome.satisfies(ComparisonOperator::Equal));
    assert!(outcome.satisfies(ComparisonOperator::LessThanOrEqual));
    assert!(!outcome.satisfies(ComparisonOperator::NotEqual));
    assert_eq!(
        compare(i64::MIN, &numeric("-9223372036854775808")).ordering(),
        Ordering::Equal
    );
    assert_eq!(compare(0_i64, &numeric("-0")).ordering(), Ordering::Equal);
}

#[test]
fn we_can_compare_integers_against_values_beyond_their_range() {
    assert_eq!(compare(i64::MAX, &numeric("1e20")).ordering(), Ordering::Less);
    assert_eq!(compare(i64::MIN, &numeric("-1e20")).ordering(), Ordering::Greater);
    assert_eq!(
        compare(i64::MAX, &numeric("9223372036854775808")).ordering(),
        Ordering::Less
    );
    assert_eq!(
        compare(i64::MIN, &numeric("-9223372036854775808.1")).ordering(),
        Ordering::Greater
    );
    assert_eq!(compare(i16::MAX, &numeric("32767.5")).ordering(), Ordering::Less);
}

#[test]
fn we_can_compare_integers_against_infinities() {
    for value in [i64::MIN, 0, i64::MAX] {
        assert_eq!(compare(value, &numeric("Infinity")).ordering(), Ordering::Less);
        assert_eq!(compare(value, &numeric("-Infinity")).ordering(), Ordering::Greater);
        assert_eq!(
            compare(value, &decode_f64(f64::INFINITY)).ordering(),
            Ordering::Less
        );
        assert_eq!(
            compare(value, &decode_f32(f32::NEG_INFINITY)).ordering(),
            Ordering::Greater
        );
    }
}

#[test]
fn nan_is_unordered_for_operators_but_sorts_above_every_integer() {
    for decoded in [numeric("NaN"), decode_f64(f64::NAN), decode_f32(f32::NAN)] {
        for value in [i64::MIN, -1, 0, 100, i64::MAX] {
            let outcome = compare_i64(value, &decoded);
            assert!(outcome.is_unordered());
            assert!(!outcome.exact_integer_equal());
            assert_eq!(outcome.sort_order(), -1);
            assert_eq!(outcome.reversed().sort_order(), 1);
            for op in ComparisonOperator::ALL {
                let expected = op == ComparisonOperator::NotEqual;
                assert_eq!(outcome.satisfies(op), expected);
                assert_eq!(outcome.reversed().satisfies(op), expected);
            }
        }
    }
}

#[test]
fn single_precision_boundary_is_exact() {
    // 16777217 is 2^24 + 1; the single-precision literal rounds down to 2^24.
    let rounded = decode_f32(16_777_217.0);
    assert_eq!(compare(16_777_216_i32, &rounded).ordering(), Ordering::Equal);
    assert_eq!(compare(16_777_217_i32, &rounded).ordering(), Ordering::Greater);
    assert!(!compare(16_777_217_i32, &rounded).satisfies(ComparisonOperator::Equal));
}

#[test]
fn double_precision_boundary_is_exact() {
    // 2^53 + 1 rounds to 2^53 as a double.
    let rounded = decode_f64(9_007_199_254_740_993.0);
    assert_eq!(
        compare(9_007_199_254_740_992_i64, &rounded).ordering(),
        Ordering::Equal
    );
    assert_eq!(
        compare(9_007_199_254_740_993_i64, &rounded).ordering(),
        Ordering::Greater
    );
    let exact = numeric("9007199254740993");
    assert_eq!(
        compare(9_007_199_254_740_993_i64, &exact).ordering(),
        Ordering::Equal
    );
}

#[test]
fn equality_is_not_falsely_transitive_across_types() {
    // A lossy cast would make all three of these equal.
    let as_numeric = numeric("9007199254740993");
    let as_double = decode_f64(9_007_199_254_740_993.0);
    let integer = 9_007_199_254_740_993_i64;
    let neighbour = 9_007_199_254_740_992_i64;

    assert!(compare(integer, &as_numeric).exact_integer_equal());
    assert!(!compare(integer, &as_double).exact_integer_equal());
    assert!(compare(neighbour, &as_double).exact_integer_equal());
    assert!(!compare(neighbour, &as_numeric).exact_integer_equal());
}

#[test]
fn reversing_an_outcome_swaps_the_operator_direction() {
    let outcome = compare(10_i32, &numeric("10.5"));
    assert!(outcome.satisfies(ComparisonOperator::LessThan));
    // 10.5 > 10
    assert!(outcome.reversed().satisfies(ComparisonOperator::GreaterThan));
    assert_eq!(outcome.reversed().sort_order(), 1);
    assert_eq!(outcome.reversed().reversed(), outcome);
}

#[test]
fn random_comparisons_agree_with_arbitrary_precision_arithmetic() {
    let mut rng = StdRng::from_seed([0u8; 32]);
    for _ in 0..2000 {
        let value: i64 = match rng.gen_range(0..3) {
            0 => rng.gen_range(-1000..1000),
            1 => rng.gen(),
            _ => [i64::MIN, i64::MAX, 0, -1, 1][rng.gen_range(0..5)],
        };
        let integral: i128 = match rng.gen_range(0..3) {
            0 => i128::from(value) + rng.gen_range(-2..=2),
            1 => i128::from(rng.gen::<i64>()) * i128::from(rng.gen_range(1_i64..4)),
            _ => i128::from(rng.gen_range(-1000_i64..1000)),
        };
        let fraction_digits = rng.gen_range(0..6);
        let fraction: String = (0..fraction_digits)
            .map(|_| char::from(b'0' + rng.gen_range(0..10_u8)))
            .collect();
        let text = if fraction.is_empty() {
            integral.to_string()
        } else if integral == 0 && rng.gen() {
            format!("-0.{fraction}")
        } else {
            format!("{integral}.{fraction}")
        };

        let expected = BigDecimal::from(value).cmp(&BigDecimal::from_str(&text).unwrap());
        assert_eq!(
            compare(value, &numeric(&text)).ordering(),
            expected,
            "{value} vs {text}"
        );
    }
}

#[test]
fn random_float_comparisons_agree_with_exact_widening() {
    let mut rng = StdRng::from_seed([0u8; 32]);
    for _ in 0..2000 {
        let value: i32 = rng.gen();
        let other = f64::from(value) + f64::from(rng.gen_range(-8..=8)) * 0.25;
        // Both sides are exactly representable as doubles here.
        let expected = f64::from(value).partial_cmp(&other).unwrap();
        assert_eq!(compare(value, &decode_f64(other)).ordering(), expected);
    }
}
