use super::{DecodedNumeric, IntegerPart, Sign, SpecialValue, MAX_MAGNITUDE};
use crate::base::numeric::{Numeric, NumericSign, NBASE};

const F64_EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
const F64_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const F64_SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const F32_EXPONENT_MASK: u32 = 0x7F80_0000;
const F32_MANTISSA_MASK: u32 = 0x007F_FFFF;
const F32_SIGN_MASK: u32 = 0x8000_0000;
/// `2^63` as a double; exactly representable.
const MAX_MAGNITUDE_F64: f64 = 9_223_372_036_854_775_808.0;

/// Decodes a host numeric.
///
/// Runs in time linear in the number of stored digits and does not allocate.
/// Digits past the weight are fractional, missing digits up to the weight are
/// implicit zeros, and leading or trailing zero digits are ignored.
#[must_use]
pub fn decode_numeric(value: &Numeric) -> DecodedNumeric {
    let sign = match value.sign() {
        NumericSign::NaN => return DecodedNumeric::Special(SpecialValue::NaN),
        NumericSign::PositiveInfinity => {
            return DecodedNumeric::Special(SpecialValue::PositiveInfinity)
        }
        NumericSign::NegativeInfinity => {
            return DecodedNumeric::Special(SpecialValue::NegativeInfinity)
        }
        NumericSign::Positive => Sign::Positive,
        NumericSign::Negative => Sign::Negative,
    };

    let weight = i64::from(value.weight());
    let mut magnitude: u128 = 0;
    let mut overflow = false;
    let mut has_fraction = false;
    let mut is_zero = true;
    for (position, &digit) in value.digits().iter().enumerate() {
        if digit == 0 {
            continue;
        }
        is_zero = false;
        let exponent = weight - position as i64;
        if exponent < 0 {
            has_fraction = true;
        } else if !overflow {
            let next = u32::try_from(exponent)
                .ok()
                .and_then(|exponent| u128::from(NBASE.unsigned_abs()).checked_pow(exponent))
                .and_then(|scale| scale.checked_mul(u128::from(digit.unsigned_abs())))
                .and_then(|term| magnitude.checked_add(term))
                .filter(|next| *next <= u128::from(MAX_MAGNITUDE));
            match next {
                Some(next) => magnitude = next,
                None => overflow = true,
            }
        }
    }

    if is_zero {
        return DecodedNumeric::ZERO;
    }
    let integer_part = if overflow {
        IntegerPart::Overflow
    } else {
        u64::try_from(magnitude).map_or(IntegerPart::Overflow, IntegerPart::Finite)
    };
    DecodedNumeric::Finite {
        sign,
        integer_part,
        has_fraction,
    }
}

/// Decodes a double. NaN and the infinities are classified from the bit pattern.
#[must_use]
pub fn decode_f64(value: f64) -> DecodedNumeric {
    let bits = value.to_bits();
    if bits & F64_EXPONENT_MASK == F64_EXPONENT_MASK {
        return DecodedNumeric::Special(if bits & F64_MANTISSA_MASK != 0 {
            SpecialValue::NaN
        } else if bits & F64_SIGN_MASK == 0 {
            SpecialValue::PositiveInfinity
        } else {
            SpecialValue::NegativeInfinity
        });
    }
    decode_finite_f64(value)
}

/// Decodes a single-precision float by exact widening to double.
#[must_use]
pub fn decode_f32(value: f32) -> DecodedNumeric {
    let bits = value.to_bits();
    if bits & F32_EXPONENT_MASK == F32_EXPONENT_MASK {
        return DecodedNumeric::Special(if bits & F32_MANTISSA_MASK != 0 {
            SpecialValue::NaN
        } else if bits & F32_SIGN_MASK == 0 {
            SpecialValue::PositiveInfinity
        } else {
            SpecialValue::NegativeInfinity
        });
    }
    decode_finite_f64(f64::from(value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn decode_finite_f64(value: f64) -> DecodedNumeric {
    if value == 0.0 {
        return DecodedNumeric::ZERO;
    }
    let truncated = value.trunc();
    let magnitude = truncated.abs();
    let integer_part = if magnitude > MAX_MAGNITUDE_F64 {
        IntegerPart::Overflow
    } else {
        // Integral and at most 2^63, so the conversion is exact.
        IntegerPart::Finite(magnitude as u64)
    };
    DecodedNumeric::Finite {
        sign: if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        },
        integer_part,
        has_fraction: truncated != value,
    }
}
