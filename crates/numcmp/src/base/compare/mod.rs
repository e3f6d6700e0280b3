//! Exact comparison of an integer against a decoded numeric or float.
mod integer_column;
pub use integer_column::IntegerColumn;

mod comparator;
pub use comparator::{compare, compare_i64, ComparisonOutcome};

#[cfg(test)]
mod comparator_test;
