use super::{
    CrossTypeOperator, CrossTypeSortSupport, EvaluationError, EvaluationResult, IntegerHashRoutine,
};
use crate::base::database::{ColumnType, LiteralValue};
use serde::{Deserialize, Serialize};

/// The body of a catalog function: what runs when the host calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Routine {
    /// A cross-type comparison operator's implementation
    Operator(CrossTypeOperator),
    /// A btree comparison support routine
    SortSupport(CrossTypeSortSupport),
    /// A hash support routine
    Hash(IntegerHashRoutine),
}

/// Value returned by a [`Routine`].
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutineOutput {
    /// Operator result
    Bool(bool),
    /// Comparison support result: `-1`, `0` or `1`
    Order(i32),
    /// 32-bit hash
    Hash32(u32),
    /// Seeded 64-bit hash
    Hash64(u64),
}

impl Routine {
    /// The function name the routine is registered under.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Routine::Operator(operator) => operator.name(),
            Routine::SortSupport(support) => support.name(),
            Routine::Hash(hash) => hash.name(),
        }
    }

    /// Declared argument types.
    #[must_use]
    pub fn argument_types(&self) -> Vec<ColumnType> {
        match self {
            Routine::Operator(operator) => vec![operator.left_type(), operator.right_type()],
            Routine::SortSupport(support) => support.argument_types().to_vec(),
            Routine::Hash(hash) => hash.argument_types(),
        }
    }

    /// Calls the routine. The routines are strict, so arguments are never null.
    ///
    /// # Errors
    /// Fails if the number or types of `arguments` do not match the declaration.
    pub fn invoke(&self, arguments: &[LiteralValue]) -> EvaluationResult<RoutineOutput> {
        let expected = self.argument_types().len();
        if arguments.len() != expected {
            return Err(EvaluationError::ArgumentCount {
                routine: self.name(),
                expected,
                actual: arguments.len(),
            });
        }
        match (self, arguments) {
            (Routine::Operator(operator), [left, right]) => {
                operator.evaluate(left, right).map(RoutineOutput::Bool)
            }
            (Routine::SortSupport(support), [left, right]) => {
                support.compare(left, right).map(RoutineOutput::Order)
            }
            (Routine::Hash(hash), [value]) => hash.hash(value).map(RoutineOutput::Hash32),
            (Routine::Hash(hash), [value, seed]) => {
                let seed = match seed {
                    LiteralValue::BigInt(seed) => u64::from_ne_bytes(seed.to_ne_bytes()),
                    other => {
                        return Err(EvaluationError::ArgumentTypeMismatch {
                            routine: self.name(),
                            position: 1,
                            expected: ColumnType::BigInt,
                            actual: other.column_type(),
                        })
                    }
                };
                hash.hash_extended(value, seed).map(RoutineOutput::Hash64)
            }
            _ => Err(EvaluationError::ArgumentCount {
                routine: self.name(),
                expected,
                actual: arguments.len(),
            }),
        }
    }
}
