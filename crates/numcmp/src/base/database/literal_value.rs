use crate::base::{
    database::{ColumnType, IntegerType},
    decode::InexactValue,
    numeric::Numeric,
};
use serde::{Deserialize, Serialize};

/// A non-null value of one of the supported column types.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum LiteralValue {
    /// i16 literals
    SmallInt(i16),
    /// i32 literals
    Int(i32),
    /// i64 literals
    BigInt(i64),
    /// Arbitrary-precision decimal literals, including NaN and the infinities
    Numeric(Numeric),
    /// f32 literals
    Real(f32),
    /// f64 literals
    Double(f64),
}

impl LiteralValue {
    /// Provides the column type associated with the literal
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::SmallInt(_) => ColumnType::SmallInt,
            Self::Int(_) => ColumnType::Int,
            Self::BigInt(_) => ColumnType::BigInt,
            Self::Numeric(_) => ColumnType::Numeric,
            Self::Real(_) => ColumnType::Real,
            Self::Double(_) => ColumnType::Double,
        }
    }

    /// The value widened to `i64`, if this is an integer literal.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::SmallInt(v) => Some((*v).into()),
            Self::Int(v) => Some((*v).into()),
            Self::BigInt(v) => Some(*v),
            Self::Numeric(_) | Self::Real(_) | Self::Double(_) => None,
        }
    }

    /// Builds an integer literal of the given type, if `value` fits it.
    #[must_use]
    pub fn from_integer(integer_type: IntegerType, value: i64) -> Option<Self> {
        match integer_type {
            IntegerType::SmallInt => i16::try_from(value).ok().map(Self::SmallInt),
            IntegerType::Int => i32::try_from(value).ok().map(Self::Int),
            IntegerType::BigInt => Some(Self::BigInt(value)),
        }
    }

    /// The tagged inexact value, if this is a numeric or float literal.
    #[must_use]
    pub fn as_inexact(&self) -> Option<InexactValue<'_>> {
        match self {
            Self::Numeric(v) => Some(InexactValue::Numeric(v)),
            Self::Real(v) => Some(InexactValue::Real(*v)),
            Self::Double(v) => Some(InexactValue::Double(*v)),
            Self::SmallInt(_) | Self::Int(_) | Self::BigInt(_) => None,
        }
    }
}

impl From<i16> for LiteralValue {
    fn from(value: i16) -> Self {
        Self::SmallInt(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<Numeric> for LiteralValue {
    fn from(value: Numeric) -> Self {
        Self::Numeric(value)
    }
}

impl From<f32> for LiteralValue {
    fn from(value: f32) -> Self {
        Self::Real(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}
