//! The value model and the per-value engine: decoding, comparison and hashing.
pub mod compare;
pub mod database;
pub mod decode;
pub mod hash;
pub(crate) mod map;
pub mod numeric;
