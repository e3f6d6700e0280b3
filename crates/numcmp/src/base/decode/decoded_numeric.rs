/// Largest integer magnitude that a 64-bit signed integer can have (that of `i64::MIN`).
pub const MAX_MAGNITUDE: u64 = 1 << 63;

/// Sign of a finite decoded value. Negative zero decodes to [`Sign::Zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly below zero
    Negative,
    /// Exactly zero
    Zero,
    /// Strictly above zero
    Positive,
}

impl Sign {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

/// Values outside the real line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialValue {
    /// Not a number
    NaN,
    /// Positive infinity
    PositiveInfinity,
    /// Negative infinity
    NegativeInfinity,
}

/// Magnitude of the integral part of a finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerPart {
    /// The magnitude, at most [`MAX_MAGNITUDE`]
    Finite(u64),
    /// The magnitude exceeds [`MAX_MAGNITUDE`], so it is outside every integer column's range
    Overflow,
}

/// A numeric or float reduced to what an integer comparison needs: the sign, the
/// truncated integral part and whether a non-zero fraction was dropped.
///
/// The value `v` decomposes as `v = sign * (integer_part + f)` with `0 <= f < 1`,
/// and `has_fraction` is `f != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedNumeric {
    /// NaN or an infinity
    Special(SpecialValue),
    /// A real number
    Finite {
        /// Sign of the whole value
        sign: Sign,
        /// Truncated integral magnitude
        integer_part: IntegerPart,
        /// Whether a non-zero fraction was truncated
        has_fraction: bool,
    },
}

impl DecodedNumeric {
    /// The decoded form of zero.
    pub const ZERO: DecodedNumeric = DecodedNumeric::Finite {
        sign: Sign::Zero,
        integer_part: IntegerPart::Finite(0),
        has_fraction: false,
    };

    /// The sign. NaN reports [`Sign::Zero`].
    #[must_use]
    pub fn sign(&self) -> Sign {
        match self {
            DecodedNumeric::Special(SpecialValue::PositiveInfinity) => Sign::Positive,
            DecodedNumeric::Special(SpecialValue::NegativeInfinity) => Sign::Negative,
            DecodedNumeric::Special(SpecialValue::NaN) => Sign::Zero,
            DecodedNumeric::Finite { sign, .. } => *sign,
        }
    }

    /// The special value, if any.
    #[must_use]
    pub fn special(&self) -> Option<SpecialValue> {
        match self {
            DecodedNumeric::Special(special) => Some(*special),
            DecodedNumeric::Finite { .. } => None,
        }
    }

    /// The truncated integral magnitude, `None` for special values.
    #[must_use]
    pub fn integer_part(&self) -> Option<IntegerPart> {
        match self {
            DecodedNumeric::Finite { integer_part, .. } => Some(*integer_part),
            DecodedNumeric::Special(_) => None,
        }
    }

    /// Whether a non-zero fraction was truncated. Always `false` for special values.
    #[must_use]
    pub fn has_fraction(&self) -> bool {
        matches!(
            self,
            DecodedNumeric::Finite {
                has_fraction: true,
                ..
            }
        )
    }

    /// Whether this is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        *self == DecodedNumeric::Special(SpecialValue::NaN)
    }

    /// The value truncated toward zero, if it is finite and within 64-bit magnitude.
    #[must_use]
    pub fn truncated(&self) -> Option<i128> {
        match self {
            DecodedNumeric::Finite {
                sign,
                integer_part: IntegerPart::Finite(magnitude),
                ..
            } => Some(i128::from(sign.signum()) * i128::from(*magnitude)),
            _ => None,
        }
    }

    /// The value itself, if it is an integer within 64-bit magnitude.
    #[must_use]
    pub fn exact_integer(&self) -> Option<i128> {
        self.truncated().filter(|_| !self.has_fraction())
    }

    /// Largest integer not above the value, if the value is finite and within 64-bit magnitude.
    #[must_use]
    pub fn floor(&self) -> Option<i128> {
        let truncated = self.truncated()?;
        Some(if self.has_fraction() && self.sign() == Sign::Negative {
            truncated - 1
        } else {
            truncated
        })
    }

    /// Smallest integer not below the value, if the value is finite and within 64-bit magnitude.
    #[must_use]
    pub fn ceil(&self) -> Option<i128> {
        let truncated = self.truncated()?;
        Some(if self.has_fraction() && self.sign() == Sign::Positive {
            truncated + 1
        } else {
            truncated
        })
    }
}
