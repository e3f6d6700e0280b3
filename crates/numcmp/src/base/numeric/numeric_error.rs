use numcmp_parser::intermediate_decimal::IntermediateDecimalError;
use snafu::Snafu;

/// Errors raised while building a [`Numeric`](super::Numeric).
///
/// A `Numeric` that exists is always well formed, so decoding and hashing never fail.
#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum NumericError {
    #[snafu(display("numeric digit {digit} at position {position} is outside 0..10000"))]
    /// A base-10000 digit is negative or too large.
    InvalidDigit {
        /// The offending digit
        digit: i16,
        /// Index of the digit, most significant first
        position: usize,
    },
    #[snafu(display("numeric weight {weight} does not fit the host representation"))]
    /// The value is too large or too small to be stored.
    WeightOutOfRange {
        /// Weight of the most significant digit
        weight: i64,
    },
    #[snafu(display("numeric display scale {scale} exceeds the host limit"))]
    /// The number of fractional decimal digits is above the host limit.
    ScaleOutOfRange {
        /// The requested scale
        scale: u64,
    },
    #[snafu(display("special numeric values carry no digits"))]
    /// NaN or an infinity was given a digit sequence.
    SpecialWithDigits,
    #[snafu(transparent)]
    /// The text is neither a special value nor a decimal.
    InvalidText {
        /// The underlying error
        source: IntermediateDecimalError,
    },
}

/// Result type for building host numerics.
pub type NumericResult<T> = Result<T, NumericError>;
