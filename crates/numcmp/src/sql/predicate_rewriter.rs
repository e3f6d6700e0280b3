//! Rewriting `integer_column OP constant` into something an integer index can serve.
//!
//! A fractional constant is replaced by the nearest integer on the side that keeps
//! the predicate's answer for every integer: `col > 10.5` holds exactly when
//! `col >= 11`, and `col < -10.5` exactly when `col <= -11`. A constant whose
//! integer bound lies strictly outside the column type's range decides the
//! predicate outright.
use crate::base::{
    database::IntegerType,
    decode::{DecodedNumeric, Sign, SpecialValue},
};
use numcmp_parser::intermediate_ast::ComparisonOperator;
use serde::{Deserialize, Serialize};

/// Outcome of rewriting one predicate.
///
/// `ConstantBoolean` gives the predicate's value for every non-null column value;
/// a null column value still yields null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewriteResult {
    /// Keep the predicate as written
    Unchanged,
    /// The predicate has this value for every non-null row
    ConstantBoolean(bool),
    /// `column operator integer_constant`, with the constant inside the column's range
    NativeComparison {
        /// Native integer comparison to apply
        operator: ComparisonOperator,
        /// Right-hand side, in range for the column type
        integer_constant: i64,
    },
}

impl RewriteResult {
    /// Evaluates the rewritten predicate for one column value. `original` evaluates the
    /// predicate as written and is used for [`RewriteResult::Unchanged`].
    #[must_use]
    pub fn evaluate(
        &self,
        column_value: Option<i64>,
        original: impl FnOnce(i64) -> bool,
    ) -> Option<bool> {
        let value = column_value?;
        Some(match self {
            RewriteResult::Unchanged => original(value),
            RewriteResult::ConstantBoolean(result) => *result,
            RewriteResult::NativeComparison {
                operator,
                integer_constant,
            } => operator.accepts(value.cmp(integer_constant)),
        })
    }
}

/// Where the integer bound of a constant falls relative to a column's range.
enum Bound {
    /// Above every value of the column type
    Above,
    /// Below every value of the column type
    Below,
    /// Within the type's range
    Within(i64),
}

fn locate(value: Option<i128>, sign: Sign, column_type: IntegerType) -> Bound {
    match value {
        Some(value) if value > i128::from(column_type.max_value()) => Bound::Above,
        Some(value) if value < i128::from(column_type.min_value()) => Bound::Below,
        // In range for the column type, so it fits in an i64.
        Some(value) => i64::try_from(value).map_or(Bound::Above, Bound::Within),
        // Finite values without a bound have a magnitude beyond every integer type.
        None if sign == Sign::Negative => Bound::Below,
        None => Bound::Above,
    }
}

/// Rewrites `column operator constant` for a column of `column_type`.
///
/// The result is equivalent to the cross-type predicate for every non-null value of
/// the column. NaN follows the cross-type operators: only `<>` holds.
#[must_use]
pub fn rewrite(
    operator: ComparisonOperator,
    column_type: IntegerType,
    constant: &DecodedNumeric,
) -> RewriteResult {
    let (sign, has_fraction) = match constant {
        DecodedNumeric::Special(SpecialValue::NaN) => {
            return RewriteResult::ConstantBoolean(operator == ComparisonOperator::NotEqual)
        }
        // Every integer is below +Infinity and above -Infinity.
        DecodedNumeric::Special(SpecialValue::PositiveInfinity) => {
            return RewriteResult::ConstantBoolean(operator.accepts(core::cmp::Ordering::Less))
        }
        DecodedNumeric::Special(SpecialValue::NegativeInfinity) => {
            return RewriteResult::ConstantBoolean(operator.accepts(core::cmp::Ordering::Greater))
        }
        DecodedNumeric::Finite {
            sign, has_fraction, ..
        } => (*sign, *has_fraction),
    };

    let (native_operator, bound) = match operator {
        ComparisonOperator::Equal | ComparisonOperator::NotEqual => {
            if has_fraction {
                return RewriteResult::ConstantBoolean(operator == ComparisonOperator::NotEqual);
            }
            (operator, constant.exact_integer())
        }
        ComparisonOperator::GreaterThan | ComparisonOperator::GreaterThanOrEqual => {
            if has_fraction {
                (ComparisonOperator::GreaterThanOrEqual, constant.ceil())
            } else {
                (operator, constant.exact_integer())
            }
        }
        ComparisonOperator::LessThan | ComparisonOperator::LessThanOrEqual => {
            if has_fraction {
                (ComparisonOperator::LessThanOrEqual, constant.floor())
            } else {
                (operator, constant.exact_integer())
            }
        }
    };
    match locate(bound, sign, column_type) {
        Bound::Within(integer_constant) => RewriteResult::NativeComparison {
            operator: native_operator,
            integer_constant,
        },
        // Every column value is below the bound.
        Bound::Above => RewriteResult::ConstantBoolean(
            native_operator.accepts(core::cmp::Ordering::Less),
        ),
        // Every column value is above the bound.
        Bound::Below => RewriteResult::ConstantBoolean(
            native_operator.accepts(core::cmp::Ordering::Greater),
        ),
    }
}
