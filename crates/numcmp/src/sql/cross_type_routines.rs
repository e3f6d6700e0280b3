use super::{EvaluationError, EvaluationResult};
use crate::base::{
    compare::{compare_i64, ComparisonOutcome},
    database::{ColumnType, InexactType, IntegerType, LiteralValue},
    decode::{DecodedNumeric, InexactValue},
    hash::{hash_int_as, hash_int_as_extended},
};
use itertools::iproduct;
use numcmp_parser::intermediate_ast::ComparisonOperator;
use serde::{Deserialize, Serialize};

/// Which operand of a cross-type routine is the integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperandOrder {
    /// `int OP inexact`
    IntegerFirst,
    /// `inexact OP int`
    InexactFirst,
}

impl OperandOrder {
    /// Both orders.
    pub const ALL: [OperandOrder; 2] = [OperandOrder::IntegerFirst, OperandOrder::InexactFirst];

    fn types(self, integer_type: IntegerType, inexact_type: InexactType) -> [ColumnType; 2] {
        match self {
            OperandOrder::IntegerFirst => [integer_type.column_type(), inexact_type.column_type()],
            OperandOrder::InexactFirst => [inexact_type.column_type(), integer_type.column_type()],
        }
    }

    fn name(self, integer_type: IntegerType, inexact_type: InexactType, infix: &str) -> String {
        let [left, right] = self.types(integer_type, inexact_type);
        format!("{left}_{infix}_{right}")
    }
}

fn check_type(
    routine: &str,
    position: usize,
    expected: ColumnType,
    value: &LiteralValue,
) -> EvaluationResult<()> {
    let actual = value.column_type();
    if actual == expected {
        Ok(())
    } else {
        Err(EvaluationError::ArgumentTypeMismatch {
            routine: routine.to_string(),
            position,
            expected,
            actual,
        })
    }
}

/// Checks both operands against the declared types and returns the integer side
/// widened to `i64` with the inexact side.
fn split_operands<'a>(
    routine: &str,
    order: OperandOrder,
    integer_type: IntegerType,
    inexact_type: InexactType,
    left: &'a LiteralValue,
    right: &'a LiteralValue,
) -> EvaluationResult<(i64, InexactValue<'a>)> {
    let [left_type, right_type] = order.types(integer_type, inexact_type);
    check_type(routine, 0, left_type, left)?;
    check_type(routine, 1, right_type, right)?;
    let (integer, inexact) = match order {
        OperandOrder::IntegerFirst => (left, right),
        OperandOrder::InexactFirst => (right, left),
    };
    match (integer.as_i64(), inexact.as_inexact()) {
        (Some(integer), Some(inexact)) => Ok((integer, inexact)),
        // The type checks above make this unreachable.
        _ => Err(EvaluationError::ArgumentTypeMismatch {
            routine: routine.to_string(),
            position: 0,
            expected: left_type,
            actual: left.column_type(),
        }),
    }
}

/// One of the 108 cross-type comparison operators: six comparisons for each pairing
/// of an integer type with an inexact type, in both operand orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrossTypeOperator {
    operator: ComparisonOperator,
    integer_type: IntegerType,
    inexact_type: InexactType,
    order: OperandOrder,
}

impl CrossTypeOperator {
    /// Describes `left OP right` where the operand types follow `order`.
    #[must_use]
    pub fn new(
        operator: ComparisonOperator,
        integer_type: IntegerType,
        inexact_type: InexactType,
        order: OperandOrder,
    ) -> Self {
        Self {
            operator,
            integer_type,
            inexact_type,
            order,
        }
    }

    /// Every cross-type operator.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(
            OperandOrder::ALL,
            IntegerType::ALL,
            InexactType::ALL,
            ComparisonOperator::ALL
        )
        .map(|(order, integer_type, inexact_type, operator)| {
            Self::new(operator, integer_type, inexact_type, order)
        })
    }

    /// The comparison as written, between the left and right operands.
    #[must_use]
    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    /// The integer operand's type.
    #[must_use]
    pub fn integer_type(&self) -> IntegerType {
        self.integer_type
    }

    /// The inexact operand's type.
    #[must_use]
    pub fn inexact_type(&self) -> InexactType {
        self.inexact_type
    }

    /// Which operand is the integer.
    #[must_use]
    pub fn order(&self) -> OperandOrder {
        self.order
    }

    /// Type of the left operand.
    #[must_use]
    pub fn left_type(&self) -> ColumnType {
        self.order.types(self.integer_type, self.inexact_type)[0]
    }

    /// Type of the right operand.
    #[must_use]
    pub fn right_type(&self) -> ColumnType {
        self.order.types(self.integer_type, self.inexact_type)[1]
    }

    /// The comparison restated with the integer as the left operand.
    #[must_use]
    pub fn integer_oriented(&self) -> ComparisonOperator {
        match self.order {
            OperandOrder::IntegerFirst => self.operator,
            OperandOrder::InexactFirst => self.operator.commute(),
        }
    }

    /// The operator giving the same answer with the operands swapped.
    #[must_use]
    pub fn commutator(&self) -> Self {
        let order = match self.order {
            OperandOrder::IntegerFirst => OperandOrder::InexactFirst,
            OperandOrder::InexactFirst => OperandOrder::IntegerFirst,
        };
        Self::new(
            self.operator.commute(),
            self.integer_type,
            self.inexact_type,
            order,
        )
    }

    /// Routine name, e.g. `int4_lt_numeric` or `float8_ge_int2`.
    #[must_use]
    pub fn name(&self) -> String {
        self.order
            .name(self.integer_type, self.inexact_type, self.operator.mnemonic())
    }

    /// Applies the operator to an integer and an already decoded inexact value.
    #[must_use]
    pub fn evaluate_decoded(&self, integer: i64, other: &DecodedNumeric) -> bool {
        compare_i64(integer, other).satisfies(self.integer_oriented())
    }

    /// Applies the operator to two literals of the declared types.
    ///
    /// # Errors
    /// Fails with [`EvaluationError::ArgumentTypeMismatch`] if an operand has the wrong type.
    pub fn evaluate(&self, left: &LiteralValue, right: &LiteralValue) -> EvaluationResult<bool> {
        let (integer, inexact) = split_operands(
            &self.name(),
            self.order,
            self.integer_type,
            self.inexact_type,
            left,
            right,
        )?;
        Ok(self.evaluate_decoded(integer, &inexact.decode()))
    }
}

/// A btree comparison support routine, returning `-1`, `0` or `1`.
///
/// Defines the total order used by sorts and merge joins, in which NaN sorts above
/// every integer. The two operand orders are exact negations of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrossTypeSortSupport {
    integer_type: IntegerType,
    inexact_type: InexactType,
    order: OperandOrder,
}

impl CrossTypeSortSupport {
    /// Comparison routine for `left` and `right` with types following `order`.
    #[must_use]
    pub fn new(integer_type: IntegerType, inexact_type: InexactType, order: OperandOrder) -> Self {
        Self {
            integer_type,
            inexact_type,
            order,
        }
    }

    /// All 18 comparison routines.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(OperandOrder::ALL, IntegerType::ALL, InexactType::ALL)
            .map(|(order, integer_type, inexact_type)| Self::new(integer_type, inexact_type, order))
    }

    /// Types of the two arguments.
    #[must_use]
    pub fn argument_types(&self) -> [ColumnType; 2] {
        self.order.types(self.integer_type, self.inexact_type)
    }

    /// Routine name, e.g. `int4_cmp_numeric`.
    #[must_use]
    pub fn name(&self) -> String {
        self.order.name(self.integer_type, self.inexact_type, "cmp")
    }

    /// Orders an integer against a decoded value, from the perspective of the left operand.
    #[must_use]
    pub fn compare_decoded(&self, integer: i64, other: &DecodedNumeric) -> i32 {
        let outcome: ComparisonOutcome = compare_i64(integer, other);
        match self.order {
            OperandOrder::IntegerFirst => outcome.sort_order(),
            OperandOrder::InexactFirst => outcome.reversed().sort_order(),
        }
    }

    /// Orders two literals of the declared types.
    ///
    /// # Errors
    /// Fails with [`EvaluationError::ArgumentTypeMismatch`] if an operand has the wrong type.
    pub fn compare(&self, left: &LiteralValue, right: &LiteralValue) -> EvaluationResult<i32> {
        let (integer, inexact) = split_operands(
            &self.name(),
            self.order,
            self.integer_type,
            self.inexact_type,
            left,
            right,
        )?;
        Ok(self.compare_decoded(integer, &inexact.decode()))
    }
}

/// A hash routine for an integer type, matching the host hash of `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntegerHashRoutine {
    integer_type: IntegerType,
    target: InexactType,
    extended: bool,
}

impl IntegerHashRoutine {
    /// Hashes `integer_type` values like `target` values; `extended` selects the seeded form.
    #[must_use]
    pub fn new(integer_type: IntegerType, target: InexactType, extended: bool) -> Self {
        Self {
            integer_type,
            target,
            extended,
        }
    }

    /// All 18 hash routines.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(IntegerType::ALL, InexactType::ALL, [false, true])
            .map(|(integer_type, target, extended)| Self::new(integer_type, target, extended))
    }

    /// The hashed integer type.
    #[must_use]
    pub fn integer_type(&self) -> IntegerType {
        self.integer_type
    }

    /// The type whose hash is reproduced.
    #[must_use]
    pub fn target(&self) -> InexactType {
        self.target
    }

    /// Whether this is the seeded 64-bit form.
    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// The hash support number this routine fills in a hash family.
    #[must_use]
    pub fn support_number(&self) -> u16 {
        if self.extended {
            2
        } else {
            1
        }
    }

    /// The integer argument, followed by an `int8` seed for the seeded form.
    #[must_use]
    pub fn argument_types(&self) -> Vec<ColumnType> {
        if self.extended {
            vec![self.integer_type.column_type(), ColumnType::BigInt]
        } else {
            vec![self.integer_type.column_type()]
        }
    }

    /// Routine name, e.g. `hash_int4_as_float8_extended`.
    #[must_use]
    pub fn name(&self) -> String {
        let suffix = if self.extended { "_extended" } else { "" };
        format!(
            "hash_{}_as_{}{suffix}",
            self.integer_type.name(),
            self.target.name()
        )
    }

    /// 32-bit hash of an integer literal.
    ///
    /// # Errors
    /// Fails with [`EvaluationError::ArgumentTypeMismatch`] if `value` has the wrong type.
    pub fn hash(&self, value: &LiteralValue) -> EvaluationResult<u32> {
        Ok(hash_int_as(self.integer_argument(value)?, self.target))
    }

    /// Seeded 64-bit hash of an integer literal.
    ///
    /// # Errors
    /// Fails with [`EvaluationError::ArgumentTypeMismatch`] if `value` has the wrong type.
    pub fn hash_extended(&self, value: &LiteralValue, seed: u64) -> EvaluationResult<u64> {
        Ok(hash_int_as_extended(
            self.integer_argument(value)?,
            self.target,
            seed,
        ))
    }

    fn integer_argument(&self, value: &LiteralValue) -> EvaluationResult<i64> {
        let name = self.name();
        check_type(&name, 0, self.integer_type.column_type(), value)?;
        value.as_i64().ok_or(EvaluationError::ArgumentTypeMismatch {
            routine: name,
            position: 0,
            expected: self.integer_type.column_type(),
            actual: value.column_type(),
        })
    }
}
