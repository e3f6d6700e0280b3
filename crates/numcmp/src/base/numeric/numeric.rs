use super::{NumericError, NumericResult};
use bigdecimal::BigDecimal;
use core::{fmt, str::FromStr};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use numcmp_parser::intermediate_decimal::IntermediateDecimal;

/// Base of the digit sequence.
pub const NBASE: i16 = 10000;
/// Decimal digits per base-[`NBASE`] digit.
pub const DEC_DIGITS: usize = 4;
/// Largest display scale the host stores.
pub const NUMERIC_MAX_DISPLAY_SCALE: u16 = 0x3FFF;

/// Most decimal digits left of the point that an `i16` weight can address.
const MAX_INTEGRAL_DIGITS: u64 = (i16::MAX as u64 + 1) * DEC_DIGITS as u64;

/// Sign marker of a [`Numeric`]. The host folds its special values into the sign.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericSign {
    /// Zero or a positive finite value
    Positive,
    /// A negative finite value
    Negative,
    /// Not a number
    NaN,
    /// Positive infinity
    PositiveInfinity,
    /// Negative infinity
    NegativeInfinity,
}

impl NumericSign {
    /// Whether this marks NaN or an infinity.
    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(
            self,
            NumericSign::NaN | NumericSign::PositiveInfinity | NumericSign::NegativeInfinity
        )
    }
}

/// An arbitrary-precision decimal as the host stores it.
///
/// The value of a finite numeric is
/// `sum(digits[i] * NBASE^(weight - i))`, negated for [`NumericSign::Negative`].
/// Digits may carry leading or trailing zeros and `weight` may point past the last
/// stored digit, in which case the missing digits are implicit zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeric {
    sign: NumericSign,
    weight: i16,
    dscale: u16,
    digits: Vec<i16>,
}

impl Numeric {
    /// Builds a numeric from its stored parts.
    ///
    /// # Errors
    /// Fails with [`NumericError::InvalidDigit`] for digits outside `0..NBASE`,
    /// [`NumericError::ScaleOutOfRange`] for a display scale above the host limit, and
    /// [`NumericError::SpecialWithDigits`] when a special value is given digits.
    pub fn try_new(
        sign: NumericSign,
        weight: i16,
        dscale: u16,
        digits: Vec<i16>,
    ) -> NumericResult<Self> {
        if sign.is_special() && !digits.is_empty() {
            return Err(NumericError::SpecialWithDigits);
        }
        if dscale > NUMERIC_MAX_DISPLAY_SCALE {
            return Err(NumericError::ScaleOutOfRange {
                scale: dscale.into(),
            });
        }
        if let Some((position, &digit)) = digits
            .iter()
            .enumerate()
            .find(|(_, d)| !(0..NBASE).contains(*d))
        {
            return Err(NumericError::InvalidDigit { digit, position });
        }
        Ok(Self {
            sign,
            weight,
            dscale,
            digits,
        })
    }

    fn special(sign: NumericSign) -> Self {
        Self {
            sign,
            weight: 0,
            dscale: 0,
            digits: Vec::new(),
        }
    }

    /// Not a number.
    #[must_use]
    pub fn nan() -> Self {
        Self::special(NumericSign::NaN)
    }

    /// Positive infinity.
    #[must_use]
    pub fn positive_infinity() -> Self {
        Self::special(NumericSign::PositiveInfinity)
    }

    /// Negative infinity.
    #[must_use]
    pub fn negative_infinity() -> Self {
        Self::special(NumericSign::NegativeInfinity)
    }

    /// Zero with display scale 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::special(NumericSign::Positive)
    }

    /// The sign marker.
    #[must_use]
    pub fn sign(&self) -> NumericSign {
        self.sign
    }

    /// Weight of the first stored digit, in powers of [`NBASE`].
    #[must_use]
    pub fn weight(&self) -> i16 {
        self.weight
    }

    /// Number of decimal digits shown after the point.
    #[must_use]
    pub fn dscale(&self) -> u16 {
        self.dscale
    }

    /// The stored base-[`NBASE`] digits, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[i16] {
        &self.digits
    }

    /// Whether this is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.sign == NumericSign::NaN
    }

    /// The finite value as a [`BigDecimal`], or `None` for NaN and the infinities.
    #[must_use]
    pub fn to_big_decimal(&self) -> Option<BigDecimal> {
        if self.sign.is_special() {
            return None;
        }
        let unscaled = self
            .digits
            .iter()
            .fold(BigInt::zero(), |acc, &digit| {
                acc * BigInt::from(NBASE) + BigInt::from(digit)
            });
        let unscaled = if self.sign == NumericSign::Negative {
            -unscaled
        } else {
            unscaled
        };
        let last_digit_weight = i64::from(self.weight) + 1 - self.digits.len() as i64;
        let value = BigDecimal::new(unscaled, -last_digit_weight * DEC_DIGITS as i64);
        Some(value.with_scale(self.dscale.into()))
    }

    fn from_unscaled(unscaled: &BigInt, scale: u64) -> NumericResult<Self> {
        let dscale = u16::try_from(scale)
            .ok()
            .filter(|dscale| *dscale <= NUMERIC_MAX_DISPLAY_SCALE)
            .ok_or(NumericError::ScaleOutOfRange { scale })?;
        if unscaled.is_zero() {
            return Ok(Self {
                dscale,
                ..Self::zero()
            });
        }
        let sign = if unscaled.is_negative() {
            NumericSign::Negative
        } else {
            NumericSign::Positive
        };

        // Align the decimal point to a digit boundary on the right, then pad the left.
        let scale = usize::from(dscale);
        let right_pad = (DEC_DIGITS - scale % DEC_DIGITS) % DEC_DIGITS;
        let mut text = unscaled.magnitude().to_string();
        text.extend(core::iter::repeat('0').take(right_pad));
        let left_pad = (DEC_DIGITS - text.len() % DEC_DIGITS) % DEC_DIGITS;
        text.insert_str(0, &"0".repeat(left_pad));

        let mut digits: Vec<i16> = text
            .as_bytes()
            .chunks(DEC_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0i16, |acc, byte| acc * 10 + i16::from(byte - b'0'))
            })
            .collect();
        let fractional_digits = (scale + right_pad) / DEC_DIGITS;
        let mut weight = digits.len() as i64 - fractional_digits as i64 - 1;

        let leading_zeros = digits.iter().take_while(|d| **d == 0).count();
        digits.drain(..leading_zeros);
        weight -= leading_zeros as i64;
        while digits.last() == Some(&0) {
            digits.pop();
        }

        let weight = i16::try_from(weight).map_err(|_| NumericError::WeightOutOfRange { weight })?;
        Ok(Self {
            sign,
            weight,
            dscale,
            digits,
        })
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            NumericSign::Negative
        } else {
            NumericSign::Positive
        };
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push((magnitude % NBASE as u64) as i16);
            magnitude /= NBASE as u64;
        }
        if digits.is_empty() {
            return Self::zero();
        }
        let weight = digits.len() as i16 - 1;
        digits.reverse();
        while digits.last() == Some(&0) {
            digits.pop();
        }
        Self {
            sign,
            weight,
            dscale: 0,
            digits,
        }
    }
}

impl TryFrom<&IntermediateDecimal> for Numeric {
    type Error = NumericError;

    fn try_from(decimal: &IntermediateDecimal) -> NumericResult<Self> {
        Self::try_from(decimal.value())
    }
}

impl TryFrom<&BigDecimal> for Numeric {
    type Error = NumericError;

    fn try_from(value: &BigDecimal) -> NumericResult<Self> {
        let (unscaled, scale) = value.as_bigint_and_exponent();
        match u64::try_from(scale) {
            Ok(scale) => Self::from_unscaled(&unscaled, scale),
            Err(_) if unscaled.is_zero() => Ok(Self::zero()),
            Err(_) => {
                // Bound the integral digits before expanding the exponent.
                let integral_digits = value.digits().saturating_add(scale.unsigned_abs());
                if integral_digits > MAX_INTEGRAL_DIGITS {
                    let weight = i64::try_from((integral_digits - 1) / DEC_DIGITS as u64)
                        .unwrap_or(i64::MAX);
                    return Err(NumericError::WeightOutOfRange { weight });
                }
                let (unscaled, _) = value.with_scale(0).into_bigint_and_exponent();
                Self::from_unscaled(&unscaled, 0)
            }
        }
    }
}

impl FromStr for Numeric {
    type Err = NumericError;

    /// Reads decimal text, or one of the spellings `NaN`, `Infinity`, `+Infinity`,
    /// `-Infinity`, `inf` and `-inf` (case-insensitive).
    fn from_str(text: &str) -> NumericResult<Self> {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "nan" => Ok(Self::nan()),
            "infinity" | "+infinity" | "inf" | "+inf" => Ok(Self::positive_infinity()),
            "-infinity" | "-inf" => Ok(Self::negative_infinity()),
            _ => Self::try_from(&IntermediateDecimal::from_str(text)?),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.sign, self.to_big_decimal()) {
            (NumericSign::NaN, _) => f.write_str("NaN"),
            (NumericSign::PositiveInfinity, _) => f.write_str("Infinity"),
            (NumericSign::NegativeInfinity, _) => f.write_str("-Infinity"),
            (_, Some(value)) => write!(f, "{value}"),
            (_, None) => Ok(()),
        }
    }
}

numcmp_parser::impl_serde_from_str!(Numeric);
