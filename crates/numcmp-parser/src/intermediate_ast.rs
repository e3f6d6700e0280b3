//! Syntax-level vocabulary for comparison predicates.
//!
//! These types carry no value semantics of their own: they name the six comparison
//! operators and describe how each one behaves under operand swaps, negation and
//! btree index strategies.
use crate::{ParseError, ParseResult};
use core::{fmt, str::FromStr};

/// One of the six SQL comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComparisonOperator {
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    /// All six operators, in declaration order.
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqual,
    ];

    /// The SQL symbol of this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "<>",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
        }
    }

    /// Short name used when building routine names, e.g. `int4_lt_numeric`.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "eq",
            ComparisonOperator::NotEqual => "ne",
            ComparisonOperator::LessThan => "lt",
            ComparisonOperator::LessThanOrEqual => "le",
            ComparisonOperator::GreaterThan => "gt",
            ComparisonOperator::GreaterThanOrEqual => "ge",
        }
    }

    /// The operator that gives the same answer once the operands are swapped.
    ///
    /// `a < b` holds exactly when `b > a` holds.
    #[must_use]
    pub fn commute(self) -> Self {
        match self {
            ComparisonOperator::LessThan => ComparisonOperator::GreaterThan,
            ComparisonOperator::LessThanOrEqual => ComparisonOperator::GreaterThanOrEqual,
            ComparisonOperator::GreaterThan => ComparisonOperator::LessThan,
            ComparisonOperator::GreaterThanOrEqual => ComparisonOperator::LessThanOrEqual,
            ComparisonOperator::Equal | ComparisonOperator::NotEqual => self,
        }
    }

    /// The btree strategy number of this operator, `None` for `<>`.
    #[must_use]
    pub fn btree_strategy(self) -> Option<u16> {
        match self {
            ComparisonOperator::LessThan => Some(1),
            ComparisonOperator::LessThanOrEqual => Some(2),
            ComparisonOperator::Equal => Some(3),
            ComparisonOperator::GreaterThanOrEqual => Some(4),
            ComparisonOperator::GreaterThan => Some(5),
            ComparisonOperator::NotEqual => None,
        }
    }

    /// Whether `ordering` (left operand compared to right operand) satisfies this operator.
    #[must_use]
    pub fn accepts(self, ordering: core::cmp::Ordering) -> bool {
        match self {
            ComparisonOperator::Equal => ordering.is_eq(),
            ComparisonOperator::NotEqual => ordering.is_ne(),
            ComparisonOperator::LessThan => ordering.is_lt(),
            ComparisonOperator::LessThanOrEqual => ordering.is_le(),
            ComparisonOperator::GreaterThan => ordering.is_gt(),
            ComparisonOperator::GreaterThanOrEqual => ordering.is_ge(),
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = ParseError;

    fn from_str(symbol: &str) -> ParseResult<Self> {
        match symbol.trim() {
            "=" | "==" => Ok(ComparisonOperator::Equal),
            "<>" | "!=" => Ok(ComparisonOperator::NotEqual),
            "<" => Ok(ComparisonOperator::LessThan),
            "<=" => Ok(ComparisonOperator::LessThanOrEqual),
            ">" => Ok(ComparisonOperator::GreaterThan),
            ">=" => Ok(ComparisonOperator::GreaterThanOrEqual),
            other => Err(ParseError::OperatorParseError(other.to_string())),
        }
    }
}
crate::impl_serde_from_str!(ComparisonOperator);

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
