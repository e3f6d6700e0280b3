use crate::{
    base::database::{InexactType, IntegerType},
    catalog::{FamilyKey, FamilyName, OperatorSignature, RegistrationBatch, RegistrationOp},
    config::EqualityRegistration,
    sql::{CrossTypeOperator, CrossTypeSortSupport, IntegerHashRoutine, OperandOrder, Routine},
};
use itertools::iproduct;
use numcmp_parser::{intermediate_ast::ComparisonOperator, Identifier};

/// Functions created by a plan: 108 operator bodies, 18 comparison supports and 18 hashes.
pub const PLANNED_FUNCTIONS: usize = 144;
/// Operators created by a plan.
pub const PLANNED_OPERATORS: usize = 108;
/// Family members added by a plan under [`EqualityRegistration::AllFamilies`].
pub const PLANNED_FAMILY_MEMBERS: usize = 246;

/// The registration batch that installs every cross-type object for `owner`.
///
/// Functions come first, then operators, then btree and hash family memberships.
/// Within each group the order is fixed, so two plans for the same inputs are equal.
///
/// Each `(integer, inexact)` pair joins the btree integer family and the inexact
/// type's btree family with five strategies in both operand orders plus the two
/// comparison supports. Its `=` operators join the inexact type's hash family,
/// where the integer type gets hash supports reproducing that family's hash.
#[must_use]
pub fn registration_plan(owner: Identifier, equality: EqualityRegistration) -> RegistrationBatch {
    let mut batch = RegistrationBatch::new(owner);

    let routines = CrossTypeOperator::all()
        .map(Routine::Operator)
        .chain(CrossTypeSortSupport::all().map(Routine::SortSupport))
        .chain(IntegerHashRoutine::all().map(Routine::Hash));
    for routine in routines {
        batch.push(RegistrationOp::CreateFunction { routine });
    }
    for operator in CrossTypeOperator::all() {
        batch.push(RegistrationOp::CreateOperator {
            signature: OperatorSignature::from(&operator),
            function: operator.name(),
        });
    }

    for (integer_type, inexact_type) in iproduct!(IntegerType::ALL, InexactType::ALL) {
        let inexact_family = FamilyName::of_inexact(inexact_type);
        for family in [FamilyName::IntegerOps, inexact_family] {
            push_btree_members(
                &mut batch,
                FamilyKey::btree(family),
                integer_type,
                inexact_type,
                equality == EqualityRegistration::AllFamilies || family == FamilyName::IntegerOps,
            );
        }
    }

    for (integer_type, inexact_type) in iproduct!(IntegerType::ALL, InexactType::ALL) {
        let family = FamilyKey::hash(FamilyName::of_inexact(inexact_type));
        for order in OperandOrder::ALL {
            let equal =
                CrossTypeOperator::new(ComparisonOperator::Equal, integer_type, inexact_type, order);
            batch.push(RegistrationOp::AddOperatorToFamily {
                family,
                strategy: 1,
                signature: OperatorSignature::from(&equal),
            });
        }
    }
    // float4 and float8 share a family, so each integer type gets its supports once.
    for integer_type in IntegerType::ALL {
        for target in [InexactType::Numeric, InexactType::Double] {
            push_hash_supports(&mut batch, integer_type, target);
        }
    }
    batch
}

fn push_btree_members(
    batch: &mut RegistrationBatch,
    family: FamilyKey,
    integer_type: IntegerType,
    inexact_type: InexactType,
    include_equality: bool,
) {
    for order in OperandOrder::ALL {
        for operator in ComparisonOperator::ALL {
            let Some(strategy) = operator.btree_strategy() else {
                continue;
            };
            if operator == ComparisonOperator::Equal && !include_equality {
                continue;
            }
            let operator = CrossTypeOperator::new(operator, integer_type, inexact_type, order);
            batch.push(RegistrationOp::AddOperatorToFamily {
                family,
                strategy,
                signature: OperatorSignature::from(&operator),
            });
        }
        let support = CrossTypeSortSupport::new(integer_type, inexact_type, order);
        let [left, right] = support.argument_types();
        batch.push(RegistrationOp::AddSupportToFamily {
            family,
            number: 1,
            left,
            right,
            function: support.name(),
            argument_types: vec![left, right],
        });
    }
}

fn push_hash_supports(
    batch: &mut RegistrationBatch,
    integer_type: IntegerType,
    target: InexactType,
) {
    let integer = integer_type.column_type();
    for extended in [false, true] {
        let routine = IntegerHashRoutine::new(integer_type, target, extended);
        batch.push(RegistrationOp::AddSupportToFamily {
            family: FamilyKey::hash(FamilyName::of_inexact(target)),
            number: routine.support_number(),
            left: integer,
            right: integer,
            function: routine.name(),
            argument_types: routine.argument_types(),
        });
    }
}
