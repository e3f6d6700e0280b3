//! Decoding of numeric and floating-point values into a form that can be compared
//! against integers without loss.
mod decoded_numeric;
pub use decoded_numeric::{DecodedNumeric, IntegerPart, Sign, SpecialValue, MAX_MAGNITUDE};

mod decode_value;
pub use decode_value::{decode_f32, decode_f64, decode_numeric};

mod inexact_value;
pub use inexact_value::InexactValue;
