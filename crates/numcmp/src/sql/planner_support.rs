use super::{rewrite, OpExpr, Operand, OperandOrder, RewriteResult};
use crate::{
    base::database::{ColumnRef, ColumnType, LiteralValue, Oid},
    catalog::{native_operator_oid, Catalog},
    config::RuntimeSettings,
    lifecycle::IdentifierCache,
};
use numcmp_parser::intermediate_ast::ComparisonOperator;
use snafu::Snafu;
use std::sync::Arc;

/// Errors raised while planning a cross-type clause.
#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum SupportError {
    /// The constant does not have the operator's declared inexact type
    #[snafu(display("constant of type {actual} passed to {operator}, expected {expected}"))]
    ConstantTypeMismatch {
        /// Name of the operator's routine
        operator: String,
        /// The operator's inexact operand type
        expected: ColumnType,
        /// The constant's type
        actual: ColumnType,
    },
}

/// Result type for planner support
pub type SupportResult<T> = Result<T, SupportError>;

/// A native integer comparison replacing a cross-type clause.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeComparison {
    /// The integer column, always the left operand
    pub column: ColumnRef,
    /// The comparison
    pub operator: ComparisonOperator,
    /// Catalog id of the host's native operator for the column type
    pub operator_oid: Oid,
    /// The right operand, typed like the column
    pub constant: LiteralValue,
    /// The right operand's value
    pub integer_constant: i64,
}

/// What the planner should do with a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedPredicate {
    /// Keep the clause as written
    Unchanged,
    /// Replace the clause with a constant, valid for every non-null row
    ConstantBoolean(bool),
    /// Replace the clause with a native integer comparison
    NativeComparison(NativeComparison),
}

impl PlannedPredicate {
    /// Evaluates the planned predicate for one column value. `original` evaluates the
    /// clause as written and is used for [`PlannedPredicate::Unchanged`].
    #[must_use]
    pub fn evaluate(
        &self,
        column_value: Option<i64>,
        original: impl FnOnce(i64) -> bool,
    ) -> Option<bool> {
        let value = column_value?;
        Some(match self {
            PlannedPredicate::Unchanged => original(value),
            PlannedPredicate::ConstantBoolean(result) => *result,
            PlannedPredicate::NativeComparison(native) => {
                native.operator.accepts(value.cmp(&native.integer_constant))
            }
        })
    }
}

/// The planner hook attached to every cross-type operator.
///
/// Offered a clause `column OP constant` (in either order) over an integer column,
/// it returns a cheaper equivalent. Clauses it does not recognise are left alone.
pub struct PlannerSupport {
    catalog: Arc<Catalog>,
    cache: Arc<IdentifierCache>,
    settings: Arc<RuntimeSettings>,
}

impl PlannerSupport {
    /// Hook over `catalog`, resolving operators through `cache`.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        cache: Arc<IdentifierCache>,
        settings: Arc<RuntimeSettings>,
    ) -> Self {
        Self {
            catalog,
            cache,
            settings,
        }
    }

    /// Plans one clause.
    ///
    /// The runtime flag is read once per call; turning it off makes every later call
    /// return [`PlannedPredicate::Unchanged`] without touching plans already built.
    ///
    /// # Errors
    /// Fails with [`SupportError::ConstantTypeMismatch`] when the constant's type does
    /// not match the operator's declaration.
    #[tracing::instrument(name = "PlannerSupport::rewrite_clause", level = "debug", skip_all)]
    pub fn rewrite_clause(&self, clause: &OpExpr) -> SupportResult<PlannedPredicate> {
        if !self.settings.support_functions_enabled() {
            return Ok(PlannedPredicate::Unchanged);
        }
        let Some(operator) = self.cache.lookup(&self.catalog, clause.opno()) else {
            return Ok(PlannedPredicate::Unchanged);
        };
        let (column, constant) = match (clause.left(), clause.right()) {
            (Operand::Column(column), Operand::Constant(constant))
            | (Operand::Constant(constant), Operand::Column(column)) => (column, constant),
            _ => return Ok(PlannedPredicate::Unchanged),
        };
        // Only an integer column on the integer side can use a native integer operator.
        let column_on_left = matches!(clause.left(), Operand::Column(_));
        if column_on_left != (operator.order() == OperandOrder::IntegerFirst)
            || column.column_type() != operator.integer_type().column_type()
        {
            return Ok(PlannedPredicate::Unchanged);
        }
        // Strict operators fold a null constant on their own.
        let Some(constant) = constant else {
            return Ok(PlannedPredicate::Unchanged);
        };
        let inexact = constant
            .as_inexact()
            .filter(|value| value.inexact_type() == operator.inexact_type())
            .ok_or_else(|| SupportError::ConstantTypeMismatch {
                operator: operator.name(),
                expected: operator.inexact_type().column_type(),
                actual: constant.column_type(),
            })?;

        let result = rewrite(
            operator.integer_oriented(),
            operator.integer_type(),
            &inexact.decode(),
        );
        tracing::debug!(opno = %clause.opno(), routine = %operator.name(), ?result, "planned cross-type clause");
        Ok(match result {
            RewriteResult::Unchanged => PlannedPredicate::Unchanged,
            RewriteResult::ConstantBoolean(value) => PlannedPredicate::ConstantBoolean(value),
            RewriteResult::NativeComparison {
                operator: native_operator,
                integer_constant,
            } => LiteralValue::from_integer(operator.integer_type(), integer_constant).map_or(
                PlannedPredicate::Unchanged,
                |constant| {
                    PlannedPredicate::NativeComparison(NativeComparison {
                        column: *column,
                        operator: native_operator,
                        operator_oid: native_operator_oid(
                            native_operator,
                            operator.integer_type(),
                        ),
                        constant,
                        integer_constant,
                    })
                },
            ),
        })
    }
}
