//! The host's own comparison operators and support functions for the six types,
//! present in every catalog from bootstrap.
use super::{
    host_catalog::CatalogState, FamilyKey, FamilyMember, FamilyName, FunctionEntry, MemberKind,
    OperatorEntry, OperatorSignature,
};
use crate::base::database::{ColumnType, IntegerType, Oid};
use numcmp_parser::intermediate_ast::ComparisonOperator;

/// Catalog ids of one type's same-type comparison operators.
struct NativeOperators {
    eq: u32,
    ne: u32,
    lt: u32,
    le: u32,
    gt: u32,
    ge: u32,
}

impl NativeOperators {
    fn oid(&self, operator: ComparisonOperator) -> Oid {
        Oid(match operator {
            ComparisonOperator::Equal => self.eq,
            ComparisonOperator::NotEqual => self.ne,
            ComparisonOperator::LessThan => self.lt,
            ComparisonOperator::LessThanOrEqual => self.le,
            ComparisonOperator::GreaterThan => self.gt,
            ComparisonOperator::GreaterThanOrEqual => self.ge,
        })
    }
}

/// A native support function: name and catalog id.
type NativeFunction = (&'static str, u32);

struct NativeType {
    column_type: ColumnType,
    family: FamilyName,
    operators: NativeOperators,
    btree_cmp: NativeFunction,
    hash: NativeFunction,
    hash_extended: NativeFunction,
}

const INT2_OPERATORS: NativeOperators = NativeOperators {
    eq: 94,
    ne: 519,
    lt: 95,
    le: 522,
    gt: 520,
    ge: 524,
};

const INT4_OPERATORS: NativeOperators = NativeOperators {
    eq: 96,
    ne: 518,
    lt: 97,
    le: 523,
    gt: 521,
    ge: 525,
};

const INT8_OPERATORS: NativeOperators = NativeOperators {
    eq: 410,
    ne: 411,
    lt: 412,
    le: 414,
    gt: 413,
    ge: 415,
};

const BUILTIN_TYPES: [NativeType; 6] = [
    NativeType {
        column_type: ColumnType::SmallInt,
        family: FamilyName::IntegerOps,
        operators: INT2_OPERATORS,
        btree_cmp: ("btint2cmp", 350),
        hash: ("hashint2", 449),
        hash_extended: ("hashint2extended", 441),
    },
    NativeType {
        column_type: ColumnType::Int,
        family: FamilyName::IntegerOps,
        operators: INT4_OPERATORS,
        btree_cmp: ("btint4cmp", 351),
        hash: ("hashint4", 450),
        hash_extended: ("hashint4extended", 425),
    },
    NativeType {
        column_type: ColumnType::BigInt,
        family: FamilyName::IntegerOps,
        operators: INT8_OPERATORS,
        btree_cmp: ("btint8cmp", 842),
        hash: ("hashint8", 949),
        hash_extended: ("hashint8extended", 442),
    },
    NativeType {
        column_type: ColumnType::Numeric,
        family: FamilyName::NumericOps,
        operators: NativeOperators {
            eq: 1752,
            ne: 1753,
            lt: 1754,
            le: 1755,
            gt: 1756,
            ge: 1757,
        },
        btree_cmp: ("numeric_cmp", 1769),
        hash: ("hash_numeric", 432),
        hash_extended: ("hash_numeric_extended", 780),
    },
    NativeType {
        column_type: ColumnType::Real,
        family: FamilyName::FloatOps,
        operators: NativeOperators {
            eq: 620,
            ne: 621,
            lt: 622,
            le: 624,
            gt: 623,
            ge: 625,
        },
        btree_cmp: ("btfloat4cmp", 354),
        hash: ("hashfloat4", 451),
        hash_extended: ("hashfloat4extended", 443),
    },
    NativeType {
        column_type: ColumnType::Double,
        family: FamilyName::FloatOps,
        operators: NativeOperators {
            eq: 670,
            ne: 671,
            lt: 672,
            le: 673,
            gt: 674,
            ge: 675,
        },
        btree_cmp: ("btfloat8cmp", 355),
        hash: ("hashfloat8", 452),
        hash_extended: ("hashfloat8extended", 444),
    },
];

/// The catalog id of the host's native `operator` on two values of `integer_type`.
#[must_use]
pub fn native_operator_oid(operator: ComparisonOperator, integer_type: IntegerType) -> Oid {
    match integer_type {
        IntegerType::SmallInt => INT2_OPERATORS.oid(operator),
        IntegerType::Int => INT4_OPERATORS.oid(operator),
        IntegerType::BigInt => INT8_OPERATORS.oid(operator),
    }
}

/// Adds the built-in families, operators and support functions to an empty state.
pub(super) fn populate(state: &mut CatalogState) {
    for family in FamilyKey::all() {
        state.families.entry(family).or_default();
    }
    for builtin in &BUILTIN_TYPES {
        let ty = builtin.column_type;
        for operator in ComparisonOperator::ALL {
            let oid = builtin.operators.oid(operator);
            state.operators.insert(
                oid,
                OperatorEntry {
                    oid,
                    signature: OperatorSignature::new(operator, ty, ty),
                    function: None,
                    owner: None,
                },
            );
            if let Some(strategy) = operator.btree_strategy() {
                state.push_builtin_member(
                    FamilyKey::btree(builtin.family),
                    MemberKind::Operator,
                    strategy,
                    ty,
                    oid,
                );
            }
        }
        state.push_builtin_member(
            FamilyKey::hash(builtin.family),
            MemberKind::Operator,
            1,
            ty,
            builtin.operators.oid(ComparisonOperator::Equal),
        );

        let supports = [
            (FamilyKey::btree(builtin.family), 1, builtin.btree_cmp, vec![ty, ty]),
            (FamilyKey::hash(builtin.family), 1, builtin.hash, vec![ty]),
            (
                FamilyKey::hash(builtin.family),
                2,
                builtin.hash_extended,
                vec![ty, ColumnType::BigInt],
            ),
        ];
        for (family, number, (name, oid), argument_types) in supports {
            let oid = Oid(oid);
            state.functions.insert(
                oid,
                FunctionEntry {
                    oid,
                    name: name.to_string(),
                    argument_types,
                    routine: None,
                    owner: None,
                },
            );
            state.push_builtin_member(family, MemberKind::Support, number, ty, oid);
        }
    }
}

impl CatalogState {
    fn push_builtin_member(
        &mut self,
        family: FamilyKey,
        kind: MemberKind,
        number: u16,
        ty: ColumnType,
        object: Oid,
    ) {
        self.families.entry(family).or_default().push(FamilyMember {
            kind,
            number,
            left: ty,
            right: ty,
            object,
            owner: None,
        });
    }
}
