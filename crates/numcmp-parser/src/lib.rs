#![doc = include_str!("../README.md")]

/// Module for handling decimal literals before they are converted into host values.
pub mod intermediate_decimal;

pub mod intermediate_ast;

#[cfg(test)]
mod intermediate_ast_test;

pub(crate) mod error;
pub use error::ParseError;
pub(crate) use error::ParseResult;

pub(crate) mod identifier;
pub use identifier::Identifier;


/// Implement Serialize and Deserialize through Display and FromStr so invalid values are rejected.
#[macro_export]
macro_rules! impl_serde_from_str {
    ($type:ty) => {
        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }
        impl<'d> serde::Deserialize<'d> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'d>,
            {
                let string = String::deserialize(deserializer)?;
                <$type as core::str::FromStr>::from_str(&string).map_err(serde::de::Error::custom)
            }
        }
    };
}
