//! The callable surface the host sees: cross-type operators and support routines,
//! the predicate rewriter and the planner hook that applies it.
mod evaluation_error;
pub use evaluation_error::{EvaluationError, EvaluationResult};

mod cross_type_routines;
pub use cross_type_routines::{
    CrossTypeOperator, CrossTypeSortSupport, IntegerHashRoutine, OperandOrder,
};


mod routine;
pub use routine::{Routine, RoutineOutput};


mod predicate_rewriter;
pub use predicate_rewriter::{rewrite, RewriteResult};

#[cfg(test)]
mod predicate_rewriter_test;

mod expr;
pub use expr::{OpExpr, Operand};

mod planner_support;
pub use planner_support::{
    NativeComparison, PlannedPredicate, PlannerSupport, SupportError, SupportResult,
};

#[cfg(test)]
mod planner_support_test;
