use super::{hash_bytes, hash_bytes_extended};
use crate::base::{decode::InexactValue, numeric::Numeric};

/// Drops leading and trailing zero digits, moving the weight with the leading ones.
/// `None` when every digit is zero.
pub(super) fn significant_digits(digits: &[i16], weight: i32) -> Option<(&[i16], i32)> {
    let start = digits.iter().position(|d| *d != 0)?;
    let end = digits.iter().rposition(|d| *d != 0)? + 1;
    let skipped = i32::try_from(start).ok()?;
    Some((&digits[start..end], weight - skipped))
}

/// Lays the digits out the way the host stores them in memory.
pub(super) fn encode_digits<'a>(digits: &[i16], buffer: &'a mut [u8]) -> &'a [u8] {
    for (chunk, digit) in buffer.chunks_exact_mut(2).zip(digits) {
        chunk.copy_from_slice(&digit.to_le_bytes());
    }
    &buffer[..2 * digits.len()]
}

#[allow(clippy::cast_sign_loss)]
pub(super) fn combine_weight(digit_hash: u32, weight: i32) -> u32 {
    digit_hash ^ weight as u32
}

#[allow(clippy::cast_sign_loss)]
pub(super) fn combine_weight_extended(digit_hash: u64, weight: i32) -> u64 {
    digit_hash ^ i64::from(weight) as u64
}

/// The host's numeric hash.
///
/// NaN and the infinities hash to 0, zero hashes to `u32::MAX`, and the sign does
/// not take part. Values with the same significant digits and weight hash alike
/// regardless of display scale.
#[must_use]
pub fn hash_numeric(value: &Numeric) -> u32 {
    if value.sign().is_special() {
        return 0;
    }
    let Some((digits, weight)) = significant_digits(value.digits(), value.weight().into()) else {
        return u32::MAX;
    };
    let mut buffer = vec![0; 2 * digits.len()];
    combine_weight(hash_bytes(encode_digits(digits, &mut buffer)), weight)
}

/// Seeded 64-bit form of [`hash_numeric`]. Specials hash to `seed`, zero to `seed - 1`.
#[must_use]
pub fn hash_numeric_extended(value: &Numeric, seed: u64) -> u64 {
    if value.sign().is_special() {
        return seed;
    }
    let Some((digits, weight)) = significant_digits(value.digits(), value.weight().into()) else {
        return seed.wrapping_sub(1);
    };
    let mut buffer = vec![0; 2 * digits.len()];
    combine_weight_extended(
        hash_bytes_extended(encode_digits(digits, &mut buffer), seed),
        weight,
    )
}

/// Both zeros hash alike and every NaN hashes as the canonical NaN.
fn canonical_float8(value: f64) -> Option<f64> {
    if value == 0.0 {
        None
    } else if value.is_nan() {
        Some(f64::NAN)
    } else {
        Some(value)
    }
}

/// The host's double hash.
#[must_use]
pub fn hash_float8(value: f64) -> u32 {
    canonical_float8(value).map_or(0, |value| hash_bytes(&value.to_le_bytes()))
}

/// Seeded 64-bit form of [`hash_float8`]. Zero hashes to `seed`.
#[must_use]
pub fn hash_float8_extended(value: f64, seed: u64) -> u64 {
    canonical_float8(value).map_or(seed, |value| {
        hash_bytes_extended(&value.to_le_bytes(), seed)
    })
}

/// The host's single-precision hash, which hashes the widened double so that
/// `float4` and `float8` values that are equal hash alike.
#[must_use]
pub fn hash_float4(value: f32) -> u32 {
    hash_float8(f64::from(value))
}

/// Seeded 64-bit form of [`hash_float4`].
#[must_use]
pub fn hash_float4_extended(value: f32, seed: u64) -> u64 {
    hash_float8_extended(f64::from(value), seed)
}

/// The host hash of an inexact value, by type.
#[must_use]
pub fn hash_inexact(value: &InexactValue<'_>) -> u32 {
    match value {
        InexactValue::Numeric(value) => hash_numeric(value),
        InexactValue::Real(value) => hash_float4(*value),
        InexactValue::Double(value) => hash_float8(*value),
    }
}
