//! Hash routines.
//!
//! [`hash_bytes`] and the `hash_numeric`/`hash_float*` routines reproduce the host's
//! own hash functions. The `hash_int_as_*` adapters hash an integer exactly the way
//! the host hashes the integer's image in another type, so that values equal under
//! the cross-type operators land in the same hash bucket.
mod lookup3;
pub use lookup3::{hash_bytes, hash_bytes_extended};

mod host_hash;
pub use host_hash::{
    hash_float4, hash_float4_extended, hash_float8, hash_float8_extended, hash_inexact,
    hash_numeric, hash_numeric_extended,
};

mod integer_hash;
pub use integer_hash::{
    hash_int_as, hash_int_as_extended, hash_int_as_float4, hash_int_as_float4_extended,
    hash_int_as_float8, hash_int_as_float8_extended, hash_int_as_numeric,
    hash_int_as_numeric_extended,
};
