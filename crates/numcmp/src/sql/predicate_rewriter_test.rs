use super::{rewrite, RewriteResult};
use crate::base::{
    compare::compare_i64,
    database::IntegerType,
    decode::{decode_f32, decode_f64, decode_numeric, DecodedNumeric},
    numeric::Numeric,
};
use core::str::FromStr;
use numcmp_parser::intermediate_ast::ComparisonOperator::{
    self, Equal, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NotEqual,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn numeric(text: &str) -> DecodedNumeric {
    decode_numeric(&Numeric::from_str(text).unwrap())
}

fn native(operator: ComparisonOperator, integer_constant: i64) -> RewriteResult {
    RewriteResult::NativeComparison {
        operator,
        integer_constant,
    }
}

#[test]
fn we_can_round_fractional_bounds_toward_the_predicate() {
    let int4 = IntegerType::Int;
    assert_eq!(rewrite(GreaterThan, int4, &numeric("10.5")), native(GreaterThanOrEqual, 11));
    assert_eq!(rewrite(GreaterThanOrEqual, int4, &numeric("10.5")), native(GreaterThanOrEqual, 11));
    assert_eq!(rewrite(LessThan, int4, &numeric("10.5")), native(LessThanOrEqual, 10));
    assert_eq!(rewrite(LessThanOrEqual, int4, &numeric("10.5")), native(LessThanOrEqual, 10));
    assert_eq!(rewrite(LessThan, int4, &numeric("-10.5")), native(LessThanOrEqual, -11));
    assert_eq!(rewrite(GreaterThan, int4, &numeric("-10.5")), native(GreaterThanOrEqual, -10));
    assert_eq!(rewrite(GreaterThan, int4, &numeric("-0.25")), native(GreaterThanOrEqual, 0));
    assert_eq!(rewrite(LessThan, int4, &numeric("0.25")), native(LessThanOrEqual, 0));
}

#[test]
fn we_can_keep_integral_bounds_and_their_operator() {
    let int8 = IntegerType::BigInt;
    for operator in ComparisonOperator::ALL {
        assert_eq!(rewrite(operator, int8, &numeric("10.000")), native(operator, 10));
    }
    assert_eq!(rewrite(GreaterThan, int8, &decode_f64(-3.0)), native(GreaterThan, -3));
    assert_eq!(rewrite(Equal, int8, &decode_f32(16_777_216.0)), native(Equal, 16_777_216));
}

#[test]
fn we_can_fold_equality_against_fractions() {
    for integer_type in IntegerType::ALL {
        assert_eq!(rewrite(Equal, integer_type, &numeric("10.5")), RewriteResult::ConstantBoolean(false));
        assert_eq!(rewrite(NotEqual, integer_type, &numeric("10.5")), RewriteResult::ConstantBoolean(true));
        assert_eq!(rewrite(Equal, integer_type, &decode_f64(0.1)), RewriteResult::ConstantBoolean(false));
    }
}

#[test]
fn we_can_fold_bounds_outside_the_column_range() {
    let int2 = IntegerType::SmallInt;
    assert_eq!(rewrite(GreaterThan, int2, &numeric("40000")), RewriteResult::ConstantBoolean(false));
    assert_eq!(rewrite(LessThan, int2, &numeric("40000")), RewriteResult::ConstantBoolean(true));
    assert_eq!(rewrite(GreaterThanOrEqual, int2, &numeric("-40000")), RewriteResult::ConstantBoolean(true));
    assert_eq!(rewrite(Equal, int2, &numeric("-40000")), RewriteResult::ConstantBoolean(false));
    assert_eq!(rewrite(NotEqual, int2, &numeric("40000")), RewriteResult::ConstantBoolean(true));
    // Rounding can push a bound just past the range.
    assert_eq!(rewrite(GreaterThan, int2, &numeric("32767.5")), RewriteResult::ConstantBoolean(false));
    assert_eq!(rewrite(LessThan, int2, &numeric("-32768.5")), RewriteResult::ConstantBoolean(false));
    // Values far beyond any integer type.
    let int8 = IntegerType::BigInt;
    assert_eq!(rewrite(LessThan, int8, &numeric("1e30")), RewriteResult::ConstantBoolean(true));
    assert_eq!(rewrite(Equal, int8, &numeric("1e30")), RewriteResult::ConstantBoolean(false));
    assert_eq!(rewrite(LessThan, int8, &decode_f64(-1e300)), RewriteResult::ConstantBoolean(false));
    assert_eq!(rewrite(LessThan, int8, &numeric("9223372036854775808")), RewriteResult::ConstantBoolean(true));
    assert_eq!(
        rewrite(LessThan, int8, &numeric("-9223372036854775808.5")),
        RewriteResult::ConstantBoolean(false)
    );
}

#[test]
fn we_can_keep_bounds_at_the_range_limits_native() {
    let int2 = IntegerType::SmallInt;
    assert_eq!(rewrite(LessThanOrEqual, int2, &numeric("32767")), native(LessThanOrEqual, 32767));
    assert_eq!(rewrite(GreaterThan, int2, &numeric("32766.5")), native(GreaterThanOrEqual, 32767));
    assert_eq!(rewrite(GreaterThanOrEqual, int2, &numeric("-32768")), native(GreaterThanOrEqual, -32768));
    let int8 = IntegerType::BigInt;
    assert_eq!(
        rewrite(Equal, int8, &numeric("-9223372036854775808")),
        native(Equal, i64::MIN)
    );
    assert_eq!(
        rewrite(LessThan, int8, &numeric("9223372036854775807.5")),
        native(LessThanOrEqual, i64::MAX)
    );
}

#[test]
fn we_can_fold_special_values() {
    for integer_type in IntegerType::ALL {
        for operator in ComparisonOperator::ALL {
            assert_eq!(
                rewrite(operator, integer_type, &numeric("NaN")),
                RewriteResult::ConstantBoolean(operator == NotEqual)
            );
            assert_eq!(
                rewrite(operator, integer_type, &decode_f64(f64::INFINITY)),
                RewriteResult::ConstantBoolean(matches!(operator, LessThan | LessThanOrEqual | NotEqual))
            );
            assert_eq!(
                rewrite(operator, integer_type, &numeric("-Infinity")),
                RewriteResult::ConstantBoolean(matches!(
                    operator,
                    GreaterThan | GreaterThanOrEqual | NotEqual
                ))
            );
        }
    }
}

#[test]
fn we_can_evaluate_folded_predicates_as_null_for_null_columns() {
    let folded = RewriteResult::ConstantBoolean(true);
    assert_eq!(folded.evaluate(None, |_| true), None);
    assert_eq!(folded.evaluate(Some(3), |_| false), Some(true));
    assert_eq!(native(LessThanOrEqual, 10).evaluate(Some(10), |_| false), Some(true));
    assert_eq!(native(LessThanOrEqual, 10).evaluate(Some(11), |_| true), Some(false));
    assert_eq!(RewriteResult::Unchanged.evaluate(Some(1), |v| v == 1), Some(true));
}

fn random_constant(rng: &mut StdRng) -> DecodedNumeric {
    match rng.gen_range(0..6) {
        0 => {
            let integer: i64 = rng.gen_range(-70_000..70_000);
            let fraction: u32 = rng.gen_range(0..100);
            let sign = if integer == 0 && rng.gen_bool(0.5) { "-" } else { "" };
            numeric(&format!("{sign}{integer}.{fraction:02}"))
        }
        1 => numeric(&rng.gen::<i64>().to_string()),
        2 => decode_f64(rng.gen_range(-1e19..1e19)),
        3 => decode_f32(rng.gen_range(-3e9_f32..3e9)),
        4 => decode_f64(f64::from(rng.gen_range(-40_000_i32..40_000)) + 0.5),
        _ => [
            numeric("NaN"),
            numeric("Infinity"),
            numeric("-Infinity"),
            numeric("32767.5"),
            numeric("-2147483648.5"),
            numeric("9223372036854775807.25"),
        ][rng.gen_range(0..6)],
    }
}

fn random_column_value(rng: &mut StdRng, integer_type: IntegerType, near: Option<i128>) -> i64 {
    let (min, max) = (integer_type.min_value(), integer_type.max_value());
    match (rng.gen_range(0..4), near) {
        (0, _) => min,
        (1, _) => max,
        (2, Some(near)) => {
            let offset = i128::from(rng.gen_range(-2_i64..=2));
            i64::try_from((near + offset).clamp(i128::from(min), i128::from(max))).unwrap()
        }
        _ => rng.gen_range(min..=max),
    }
}

#[test]
fn we_can_rewrite_without_changing_any_answer() {
    let mut rng = StdRng::from_seed([0u8; 32]);
    for _ in 0..20_000 {
        let constant = random_constant(&mut rng);
        let integer_type = IntegerType::ALL[rng.gen_range(0..3)];
        let operator = ComparisonOperator::ALL[rng.gen_range(0..6)];
        let rewritten = rewrite(operator, integer_type, &constant);
        for _ in 0..8 {
            let value = random_column_value(&mut rng, integer_type, constant.truncated());
            let expected = compare_i64(value, &constant).satisfies(operator);
            assert_eq!(
                rewritten.evaluate(Some(value), |v| compare_i64(v, &constant).satisfies(operator)),
                Some(expected),
                "{value} {operator} {constant:?} rewritten to {rewritten:?}"
            );
        }
    }
}
