use super::{
    CrossTypeOperator, NativeComparison, OpExpr, Operand, OperandOrder, PlannedPredicate,
    SupportError,
};
use crate::{
    base::{
        database::{ColumnRef, ColumnType, InexactType, IntegerType, LiteralValue, Oid},
        numeric::Numeric,
    },
    catalog::Catalog,
    config::NumcmpConfig,
    lifecycle::LifecycleManager,
};
use core::str::FromStr;
use numcmp_parser::{intermediate_ast::ComparisonOperator, Identifier};
use std::sync::Arc;

fn activated() -> Arc<LifecycleManager> {
    let manager = LifecycleManager::new(Arc::new(Catalog::bootstrap()), &NumcmpConfig::default());
    manager.activate().unwrap();
    manager
}

fn opno(
    manager: &LifecycleManager,
    operator: ComparisonOperator,
    integer_type: IntegerType,
    inexact_type: InexactType,
    order: OperandOrder,
) -> Oid {
    let operator = CrossTypeOperator::new(operator, integer_type, inexact_type, order);
    manager
        .cache()
        .operator_oid(manager.catalog(), &operator)
        .unwrap()
}

fn column(column_type: ColumnType) -> Operand {
    Operand::Column(ColumnRef::new(
        Identifier::try_new("a").unwrap(),
        column_type,
    ))
}

fn numeric(text: &str) -> Operand {
    Operand::Constant(Some(LiteralValue::Numeric(
        Numeric::from_str(text).unwrap(),
    )))
}

#[test]
fn we_can_rewrite_a_fractional_bound_into_a_native_comparison() {
    let manager = activated();
    let gt = opno(
        &manager,
        ComparisonOperator::GreaterThan,
        IntegerType::Int,
        InexactType::Numeric,
        OperandOrder::IntegerFirst,
    );
    let clause = OpExpr::new(gt, column(ColumnType::Int), numeric("10.5"));
    assert_eq!(
        manager.planner_support().rewrite_clause(&clause),
        Ok(PlannedPredicate::NativeComparison(NativeComparison {
            column: ColumnRef::new(Identifier::try_new("a").unwrap(), ColumnType::Int),
            operator: ComparisonOperator::GreaterThanOrEqual,
            operator_oid: Oid(525),
            constant: LiteralValue::Int(11),
            integer_constant: 11,
        }))
    );
}

#[test]
fn we_can_rewrite_a_clause_with_the_constant_on_the_left() {
    let manager = activated();
    // 10.5 < a  is  a >= 11
    let lt = opno(
        &manager,
        ComparisonOperator::LessThan,
        IntegerType::SmallInt,
        InexactType::Double,
        OperandOrder::InexactFirst,
    );
    let clause = OpExpr::new(
        lt,
        Operand::Constant(Some(LiteralValue::Double(10.5))),
        column(ColumnType::SmallInt),
    );
    let PlannedPredicate::NativeComparison(native) =
        manager.planner_support().rewrite_clause(&clause).unwrap()
    else {
        panic!("expected a native comparison");
    };
    assert_eq!(native.operator, ComparisonOperator::GreaterThanOrEqual);
    assert_eq!(native.operator_oid, Oid(524));
    assert_eq!(native.constant, LiteralValue::SmallInt(11));
}

#[test]
fn we_can_fold_clauses_to_constants() {
    let manager = activated();
    let support = manager.planner_support();
    let eq = opno(
        &manager,
        ComparisonOperator::Equal,
        IntegerType::SmallInt,
        InexactType::Numeric,
        OperandOrder::IntegerFirst,
    );
    let ne = opno(
        &manager,
        ComparisonOperator::NotEqual,
        IntegerType::SmallInt,
        InexactType::Numeric,
        OperandOrder::IntegerFirst,
    );
    let clause = |opno, text| OpExpr::new(opno, column(ColumnType::SmallInt), numeric(text));
    assert_eq!(
        support.rewrite_clause(&clause(eq, "1.5")),
        Ok(PlannedPredicate::ConstantBoolean(false))
    );
    assert_eq!(
        support.rewrite_clause(&clause(ne, "100000")),
        Ok(PlannedPredicate::ConstantBoolean(true))
    );
    assert_eq!(
        support.rewrite_clause(&clause(eq, "NaN")),
        Ok(PlannedPredicate::ConstantBoolean(false))
    );
}

#[test]
fn we_can_leave_unrecognised_clauses_unchanged() {
    let manager = activated();
    let support = manager.planner_support();
    let lt = opno(
        &manager,
        ComparisonOperator::LessThan,
        IntegerType::Int,
        InexactType::Numeric,
        OperandOrder::IntegerFirst,
    );
    // A native operator.
    let native = OpExpr::new(
        Oid(97),
        column(ColumnType::Int),
        Operand::Constant(Some(LiteralValue::Int(3))),
    );
    assert_eq!(support.rewrite_clause(&native), Ok(PlannedPredicate::Unchanged));
    // Two columns.
    let columns = OpExpr::new(lt, column(ColumnType::Int), column(ColumnType::Numeric));
    assert_eq!(support.rewrite_clause(&columns), Ok(PlannedPredicate::Unchanged));
    // A null constant.
    let null = OpExpr::new(lt, column(ColumnType::Int), Operand::Constant(None));
    assert_eq!(support.rewrite_clause(&null), Ok(PlannedPredicate::Unchanged));
    // A column of another integer type.
    let wider = OpExpr::new(lt, column(ColumnType::BigInt), numeric("1.5"));
    assert_eq!(support.rewrite_clause(&wider), Ok(PlannedPredicate::Unchanged));
    // A column on the inexact side.
    let swapped = OpExpr::new(lt, numeric("1.5"), column(ColumnType::Int));
    assert_eq!(support.rewrite_clause(&swapped), Ok(PlannedPredicate::Unchanged));
}

#[test]
fn we_cannot_rewrite_a_constant_of_the_wrong_type() {
    let manager = activated();
    let lt = opno(
        &manager,
        ComparisonOperator::LessThan,
        IntegerType::Int,
        InexactType::Numeric,
        OperandOrder::IntegerFirst,
    );
    let clause = OpExpr::new(
        lt,
        column(ColumnType::Int),
        Operand::Constant(Some(LiteralValue::Real(1.5))),
    );
    assert_eq!(
        manager.planner_support().rewrite_clause(&clause),
        Err(SupportError::ConstantTypeMismatch {
            operator: "int4_lt_numeric".to_string(),
            expected: ColumnType::Numeric,
            actual: ColumnType::Real,
        })
    );
}

#[test]
fn we_can_turn_rewriting_off_at_runtime() {
    let manager = activated();
    let support = manager.planner_support();
    let lt = opno(
        &manager,
        ComparisonOperator::LessThan,
        IntegerType::BigInt,
        InexactType::Numeric,
        OperandOrder::IntegerFirst,
    );
    let clause = OpExpr::new(lt, column(ColumnType::BigInt), numeric("2.5"));
    let planned = support.rewrite_clause(&clause).unwrap();
    assert!(matches!(planned, PlannedPredicate::NativeComparison(_)));

    manager.settings().set_support_functions_enabled(false);
    assert_eq!(support.rewrite_clause(&clause), Ok(PlannedPredicate::Unchanged));
    // Plans made earlier keep their rewrite.
    assert_eq!(planned.evaluate(Some(2), |_| false), Some(true));
    assert_eq!(planned.evaluate(Some(3), |_| true), Some(false));
    assert_eq!(planned.evaluate(None, |_| true), None);

    manager.settings().set_support_functions_enabled(true);
    assert_eq!(support.rewrite_clause(&clause), Ok(planned));
}

#[test]
fn we_cannot_recognise_an_operator_id_from_before_a_reinstall() {
    let manager = activated();
    let support = manager.planner_support();
    let operator = CrossTypeOperator::new(
        ComparisonOperator::LessThanOrEqual,
        IntegerType::Int,
        InexactType::Real,
        OperandOrder::IntegerFirst,
    );
    let old = manager
        .cache()
        .operator_oid(manager.catalog(), &operator)
        .unwrap();
    manager.deactivate().unwrap();
    manager.activate().unwrap();
    let new = manager
        .cache()
        .operator_oid(manager.catalog(), &operator)
        .unwrap();
    assert_ne!(old, new);

    let constant = Operand::Constant(Some(LiteralValue::Real(7.5)));
    let stale = OpExpr::new(old, column(ColumnType::Int), constant.clone());
    assert_eq!(support.rewrite_clause(&stale), Ok(PlannedPredicate::Unchanged));
    let current = OpExpr::new(new, column(ColumnType::Int), constant);
    assert!(matches!(
        support.rewrite_clause(&current),
        Ok(PlannedPredicate::NativeComparison(NativeComparison {
            integer_constant: 7,
            ..
        }))
    ));
}
