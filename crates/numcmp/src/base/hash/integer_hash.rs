use super::{
    host_hash::{combine_weight, combine_weight_extended, encode_digits, significant_digits},
    hash_bytes, hash_bytes_extended, hash_float4, hash_float4_extended, hash_float8,
    hash_float8_extended,
};
use crate::base::{database::InexactType, numeric::NBASE};

/// Base-10000 digits needed for any `i64` magnitude.
const MAX_INT64_DIGITS: usize = 5;

/// Base-10000 digits of `|value|`, most significant first, with the digit count and the
/// weight of the first digit. Zero has no digits.
fn integer_digits(value: i64) -> ([i16; MAX_INT64_DIGITS], usize, i32) {
    let base = u64::from(NBASE.unsigned_abs());
    let mut digits = [0_i16; MAX_INT64_DIGITS];
    let mut magnitude = value.unsigned_abs();
    let mut count = 0;
    while magnitude > 0 {
        // Each remainder is below 10000.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        {
            digits[count] = (magnitude % base) as i16;
        }
        magnitude /= base;
        count += 1;
    }
    digits[..count].reverse();
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let weight = count as i32 - 1;
    (digits, count, weight)
}

/// Hashes `value` exactly as the host hashes the numeric with the same value.
/// Uses no floating point and does not allocate.
#[must_use]
pub fn hash_int_as_numeric(value: i64) -> u32 {
    let (digits, count, weight) = integer_digits(value);
    let Some((digits, weight)) = significant_digits(&digits[..count], weight) else {
        return u32::MAX;
    };
    let mut buffer = [0_u8; 2 * MAX_INT64_DIGITS];
    combine_weight(hash_bytes(encode_digits(digits, &mut buffer)), weight)
}

/// Seeded 64-bit form of [`hash_int_as_numeric`].
#[must_use]
pub fn hash_int_as_numeric_extended(value: i64, seed: u64) -> u64 {
    let (digits, count, weight) = integer_digits(value);
    let Some((digits, weight)) = significant_digits(&digits[..count], weight) else {
        return seed.wrapping_sub(1);
    };
    let mut buffer = [0_u8; 2 * MAX_INT64_DIGITS];
    combine_weight_extended(
        hash_bytes_extended(encode_digits(digits, &mut buffer), seed),
        weight,
    )
}

/// Hashes `value` as the host hashes its nearest `float4`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hash_int_as_float4(value: i64) -> u32 {
    hash_float4(value as f32)
}

/// Seeded 64-bit form of [`hash_int_as_float4`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hash_int_as_float4_extended(value: i64, seed: u64) -> u64 {
    hash_float4_extended(value as f32, seed)
}

/// Hashes `value` as the host hashes its nearest `float8`.
///
/// Values above 2^53 share a hash with their rounded neighbours; the equality
/// operator then tells them apart.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hash_int_as_float8(value: i64) -> u32 {
    hash_float8(value as f64)
}

/// Seeded 64-bit form of [`hash_int_as_float8`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hash_int_as_float8_extended(value: i64, seed: u64) -> u64 {
    hash_float8_extended(value as f64, seed)
}

/// Hashes `value` as the host hashes its image in `target`.
#[must_use]
pub fn hash_int_as(value: i64, target: InexactType) -> u32 {
    match target {
        InexactType::Numeric => hash_int_as_numeric(value),
        InexactType::Real => hash_int_as_float4(value),
        InexactType::Double => hash_int_as_float8(value),
    }
}

/// Seeded form of [`hash_int_as`].
#[must_use]
pub fn hash_int_as_extended(value: i64, target: InexactType, seed: u64) -> u64 {
    match target {
        InexactType::Numeric => hash_int_as_numeric_extended(value, seed),
        InexactType::Real => hash_int_as_float4_extended(value, seed),
        InexactType::Double => hash_int_as_float8_extended(value, seed),
    }
}
