//! The host's stored arbitrary-precision decimal representation.
mod numeric_error;
pub use numeric_error::{NumericError, NumericResult};

#[allow(clippy::module_inception)]
mod numeric;
pub use numeric::{Numeric, NumericSign, DEC_DIGITS, NBASE, NUMERIC_MAX_DISPLAY_SCALE};

#[cfg(test)]
mod numeric_test;
