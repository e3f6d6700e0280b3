//! Host value model: column types, literal values, column references and catalog object ids.
mod column_type;
pub use column_type::{ColumnType, InexactType, IntegerType};


mod literal_value;
pub use literal_value::LiteralValue;

#[cfg(test)]
mod literal_value_test;

mod column_ref;
pub use column_ref::ColumnRef;

mod oid;
pub use oid::Oid;
