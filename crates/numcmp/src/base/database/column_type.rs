use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

/// The host column types this crate compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// `int2`: 16-bit signed integer
    #[serde(rename = "int2")]
    SmallInt,
    /// `int4`: 32-bit signed integer
    #[serde(rename = "int4")]
    Int,
    /// `int8`: 64-bit signed integer
    #[serde(rename = "int8")]
    BigInt,
    /// `numeric`: arbitrary-precision decimal
    Numeric,
    /// `float4`: IEEE-754 single precision
    #[serde(rename = "float4")]
    Real,
    /// `float8`: IEEE-754 double precision
    #[serde(rename = "float8")]
    Double,
}

impl ColumnType {
    /// The host's canonical type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::SmallInt => "int2",
            ColumnType::Int => "int4",
            ColumnType::BigInt => "int8",
            ColumnType::Numeric => "numeric",
            ColumnType::Real => "float4",
            ColumnType::Double => "float8",
        }
    }

    /// The integer type, if this is one.
    #[must_use]
    pub fn integer_type(self) -> Option<IntegerType> {
        match self {
            ColumnType::SmallInt => Some(IntegerType::SmallInt),
            ColumnType::Int => Some(IntegerType::Int),
            ColumnType::BigInt => Some(IntegerType::BigInt),
            ColumnType::Numeric | ColumnType::Real | ColumnType::Double => None,
        }
    }

    /// The inexact type, if this is one.
    #[must_use]
    pub fn inexact_type(self) -> Option<InexactType> {
        match self {
            ColumnType::Numeric => Some(InexactType::Numeric),
            ColumnType::Real => Some(InexactType::Real),
            ColumnType::Double => Some(InexactType::Double),
            ColumnType::SmallInt | ColumnType::Int | ColumnType::BigInt => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    /// Accepts canonical names and the usual SQL aliases.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "int2" | "smallint" => Ok(ColumnType::SmallInt),
            "int4" | "int" | "integer" => Ok(ColumnType::Int),
            "int8" | "bigint" => Ok(ColumnType::BigInt),
            "numeric" | "decimal" => Ok(ColumnType::Numeric),
            "float4" | "real" => Ok(ColumnType::Real),
            "float8" | "double precision" => Ok(ColumnType::Double),
            other => Err(format!("unsupported column type: {other}")),
        }
    }
}

/// An exact integer column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntegerType {
    /// `int2`
    SmallInt,
    /// `int4`
    Int,
    /// `int8`
    BigInt,
}

impl IntegerType {
    /// All integer widths, narrowest first.
    pub const ALL: [IntegerType; 3] = [IntegerType::SmallInt, IntegerType::Int, IntegerType::BigInt];

    /// Smallest representable value.
    #[must_use]
    pub fn min_value(self) -> i64 {
        match self {
            IntegerType::SmallInt => i16::MIN.into(),
            IntegerType::Int => i32::MIN.into(),
            IntegerType::BigInt => i64::MIN,
        }
    }

    /// Largest representable value.
    #[must_use]
    pub fn max_value(self) -> i64 {
        match self {
            IntegerType::SmallInt => i16::MAX.into(),
            IntegerType::Int => i32::MAX.into(),
            IntegerType::BigInt => i64::MAX,
        }
    }

    /// Whether `value` fits this type.
    #[must_use]
    pub fn contains(self, value: i128) -> bool {
        (i128::from(self.min_value())..=i128::from(self.max_value())).contains(&value)
    }

    /// The corresponding column type.
    #[must_use]
    pub fn column_type(self) -> ColumnType {
        match self {
            IntegerType::SmallInt => ColumnType::SmallInt,
            IntegerType::Int => ColumnType::Int,
            IntegerType::BigInt => ColumnType::BigInt,
        }
    }

    /// The host's canonical type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.column_type().name()
    }
}

/// A column type that may hold fractional, special or imprecise values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InexactType {
    /// `numeric`
    Numeric,
    /// `float4`
    Real,
    /// `float8`
    Double,
}

impl InexactType {
    /// All inexact types.
    pub const ALL: [InexactType; 3] = [InexactType::Numeric, InexactType::Real, InexactType::Double];

    /// The corresponding column type.
    #[must_use]
    pub fn column_type(self) -> ColumnType {
        match self {
            InexactType::Numeric => ColumnType::Numeric,
            InexactType::Real => ColumnType::Real,
            InexactType::Double => ColumnType::Double,
        }
    }

    /// The host's canonical type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.column_type().name()
    }
}
