//! Decimal literals as written in predicates, before they are converted into the
//! host's stored numeric representation.
//!
//! Only finite values are represented here. The special spellings `NaN` and
//! `Infinity` are handled by the host value types.
use crate::intermediate_decimal::IntermediateDecimalError::ParseError;
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use core::{fmt, hash::Hash, str::FromStr};
use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Errors related to reading decimal literals
#[allow(clippy::module_name_repetitions)]
#[derive(Snafu, Debug, PartialEq)]
pub enum IntermediateDecimalError {
    /// Represents an error encountered during the parsing of a decimal string.
    #[snafu(display("{error}"))]
    ParseError {
        /// The underlying error
        error: ParseBigDecimalError,
    },
}
impl From<ParseBigDecimalError> for IntermediateDecimalError {
    fn from(value: ParseBigDecimalError) -> Self {
        IntermediateDecimalError::ParseError { error: value }
    }
}

impl Eq for IntermediateDecimalError {}

/// A finite decimal literal, normalized so that trailing fractional zeros are dropped.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Hash)]
pub struct IntermediateDecimal {
    value: BigDecimal,
}

impl IntermediateDecimal {
    /// The value of this literal.
    #[must_use]
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }
}

impl fmt::Display for IntermediateDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for IntermediateDecimal {
    type Err = IntermediateDecimalError;

    fn from_str(decimal_string: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(decimal_string.trim())
            .map(|value| IntermediateDecimal {
                value: value.normalized(),
            })
            .map_err(|err| ParseError { error: err })
    }
}

impl From<BigDecimal> for IntermediateDecimal {
    fn from(value: BigDecimal) -> Self {
        IntermediateDecimal {
            value: value.normalized(),
        }
    }
}

impl TryFrom<&str> for IntermediateDecimal {
    type Error = IntermediateDecimalError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        IntermediateDecimal::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn we_can_parse_a_simple_decimal() {
        let decimal: IntermediateDecimal = "123.45".parse().unwrap();
        assert_eq!(decimal.to_string(), "123.45");
        assert_eq!(decimal.value(), &BigDecimal::new(12345.into(), 2));
    }

    #[test]
    fn we_can_parse_decimals_with_leading_and_trailing_zeros() {
        let decimal = IntermediateDecimal::try_from("000123.45000").unwrap();
        assert_eq!(decimal.to_string(), "123.45");
        assert_eq!(decimal.value().fractional_digit_count(), 2);
        let integral: IntermediateDecimal = "-10.000".parse().unwrap();
        assert!(integral.value().is_integer());
        assert_eq!(integral, IntermediateDecimal::from(BigDecimal::from(-10)));
    }

    #[test]
    fn we_can_keep_large_exponents_unexpanded() {
        let decimal: IntermediateDecimal = "1e20000000".parse().unwrap();
        assert_eq!(decimal.value().as_bigint_and_exponent().1, -20_000_000);
    }

    #[test]
    fn we_cannot_parse_garbage() {
        assert!(matches!(
            "12.3.4".parse::<IntermediateDecimal>(),
            Err(ParseError { .. })
        ));
        assert!("".parse::<IntermediateDecimal>().is_err());
    }
}
