use super::{decode_f32, decode_f64, decode_numeric, DecodedNumeric};
use crate::base::{database::InexactType, numeric::Numeric};

/// A borrowed value of one of the inexact types.
///
/// Every operator and routine dispatches on this tag and decodes the value once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InexactValue<'a> {
    /// A host numeric
    Numeric(&'a Numeric),
    /// A single-precision float
    Real(f32),
    /// A double-precision float
    Double(f64),
}

impl InexactValue<'_> {
    /// The type of this value.
    #[must_use]
    pub fn inexact_type(&self) -> InexactType {
        match self {
            InexactValue::Numeric(_) => InexactType::Numeric,
            InexactValue::Real(_) => InexactType::Real,
            InexactValue::Double(_) => InexactType::Double,
        }
    }

    /// Decodes the value.
    #[must_use]
    pub fn decode(&self) -> DecodedNumeric {
        match self {
            InexactValue::Numeric(value) => decode_numeric(value),
            InexactValue::Real(value) => decode_f32(*value),
            InexactValue::Double(value) => decode_f64(*value),
        }
    }
}
