use super::IntegerColumn;
use crate::base::decode::{DecodedNumeric, IntegerPart, Sign, SpecialValue};
use core::cmp::Ordering;
use numcmp_parser::intermediate_ast::ComparisonOperator;

/// Result of comparing an integer (left) against a decoded value (right).
///
/// `ordering` is a total order used for sorting, in which NaN sits above every
/// integer. `unordered` records that the right side was NaN, in which case every
/// comparison operator other than `<>` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComparisonOutcome {
    ordering: Ordering,
    unordered: bool,
}

impl ComparisonOutcome {
    const NAN: ComparisonOutcome = ComparisonOutcome {
        ordering: Ordering::Less,
        unordered: true,
    };

    fn ordered(ordering: Ordering) -> Self {
        Self {
            ordering,
            unordered: false,
        }
    }

    /// Sort order of the left operand relative to the right one.
    #[must_use]
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// Whether one side was NaN.
    #[must_use]
    pub fn is_unordered(&self) -> bool {
        self.unordered
    }

    /// Whether the two sides denote the same integer.
    #[must_use]
    pub fn exact_integer_equal(&self) -> bool {
        !self.unordered && self.ordering.is_eq()
    }

    /// Whether `left op right` holds.
    #[must_use]
    pub fn satisfies(&self, op: ComparisonOperator) -> bool {
        if self.unordered {
            op == ComparisonOperator::NotEqual
        } else {
            op.accepts(self.ordering)
        }
    }

    /// `-1`, `0` or `1`, as returned by btree comparison support routines.
    #[must_use]
    pub fn sort_order(&self) -> i32 {
        match self.ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// The outcome with the operands swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            ordering: self.ordering.reverse(),
            unordered: self.unordered,
        }
    }
}

/// Compares `value` against `other` exactly.
///
/// No conversion of either side ever loses information: the integer is compared
/// with the truncated integral part of `other`, and a tie is broken by the dropped
/// fraction.
#[must_use]
pub fn compare<I: IntegerColumn>(value: I, other: &DecodedNumeric) -> ComparisonOutcome {
    compare_i64(value.into(), other)
}

/// [`compare`] for a value already widened to `i64`.
#[must_use]
pub fn compare_i64(value: i64, other: &DecodedNumeric) -> ComparisonOutcome {
    match other {
        DecodedNumeric::Special(SpecialValue::NaN) => ComparisonOutcome::NAN,
        DecodedNumeric::Special(SpecialValue::PositiveInfinity) => {
            ComparisonOutcome::ordered(Ordering::Less)
        }
        DecodedNumeric::Special(SpecialValue::NegativeInfinity) => {
            ComparisonOutcome::ordered(Ordering::Greater)
        }
        DecodedNumeric::Finite {
            sign,
            integer_part: IntegerPart::Overflow,
            ..
        } => ComparisonOutcome::ordered(if *sign == Sign::Negative {
            Ordering::Greater
        } else {
            Ordering::Less
        }),
        DecodedNumeric::Finite {
            sign,
            integer_part: IntegerPart::Finite(magnitude),
            has_fraction,
        } => {
            let truncated = i128::from(sign.signum()) * i128::from(*magnitude);
            let ordering = match i128::from(value).cmp(&truncated) {
                // The fraction pushes `other` away from zero.
                Ordering::Equal if *has_fraction => match sign {
                    Sign::Negative => Ordering::Greater,
                    Sign::Zero | Sign::Positive => Ordering::Less,
                },
                ordering => ordering,
            };
            ComparisonOutcome::ordered(ordering)
        }
    }
}
