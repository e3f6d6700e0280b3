use crate::{
    base::database::{ColumnType, InexactType, Oid},
    sql::{CrossTypeOperator, Routine},
};
use core::fmt;
use numcmp_parser::{intermediate_ast::ComparisonOperator, Identifier};
use serde::{Deserialize, Serialize};

/// Index access methods that group operators into families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMethod {
    /// Ordered indexes, sorts and merge joins
    Btree,
    /// Hash indexes, hash joins and hash aggregation
    Hash,
}

/// The operator families the comparison types belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyName {
    /// `int2`, `int4` and `int8`
    IntegerOps,
    /// `numeric`
    NumericOps,
    /// `float4` and `float8`
    FloatOps,
}

impl FamilyName {
    /// The family an inexact type belongs to.
    #[must_use]
    pub fn of_inexact(inexact_type: InexactType) -> Self {
        match inexact_type {
            InexactType::Numeric => FamilyName::NumericOps,
            InexactType::Real | InexactType::Double => FamilyName::FloatOps,
        }
    }

    /// The host's name for the family.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FamilyName::IntegerOps => "integer_ops",
            FamilyName::NumericOps => "numeric_ops",
            FamilyName::FloatOps => "float_ops",
        }
    }
}

/// An operator family: an access method and a family name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyKey {
    /// The access method
    pub method: AccessMethod,
    /// The family name
    pub name: FamilyName,
}

impl FamilyKey {
    /// The btree family `name`.
    #[must_use]
    pub fn btree(name: FamilyName) -> Self {
        Self {
            method: AccessMethod::Btree,
            name,
        }
    }

    /// The hash family `name`.
    #[must_use]
    pub fn hash(name: FamilyName) -> Self {
        Self {
            method: AccessMethod::Hash,
            name,
        }
    }

    /// Every family the host knows.
    #[must_use]
    pub fn all() -> [FamilyKey; 6] {
        let names = [FamilyName::IntegerOps, FamilyName::NumericOps, FamilyName::FloatOps];
        [
            Self::btree(names[0]),
            Self::btree(names[1]),
            Self::btree(names[2]),
            Self::hash(names[0]),
            Self::hash(names[1]),
            Self::hash(names[2]),
        ]
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method {
            AccessMethod::Btree => "btree",
            AccessMethod::Hash => "hash",
        };
        write!(f, "{method}/{}", self.name.as_str())
    }
}

/// An operator's identity: symbol and operand types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperatorSignature {
    /// The comparison symbol
    pub operator: ComparisonOperator,
    /// Left operand type
    pub left: ColumnType,
    /// Right operand type
    pub right: ColumnType,
}

impl OperatorSignature {
    /// `left operator right`.
    #[must_use]
    pub fn new(operator: ComparisonOperator, left: ColumnType, right: ColumnType) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }
}

impl From<&CrossTypeOperator> for OperatorSignature {
    fn from(operator: &CrossTypeOperator) -> Self {
        Self::new(
            operator.operator(),
            operator.left_type(),
            operator.right_type(),
        )
    }
}

impl fmt::Display for OperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.operator, self.left, self.right)
    }
}

/// A catalog function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    /// Catalog id
    pub oid: Oid,
    /// Function name
    pub name: String,
    /// Declared argument types
    pub argument_types: Vec<ColumnType>,
    /// The body; `None` for host built-ins implemented natively
    pub routine: Option<Routine>,
    /// Owning extension; `None` for built-ins
    pub owner: Option<Identifier>,
}

/// A catalog operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    /// Catalog id
    pub oid: Oid,
    /// Symbol and operand types
    pub signature: OperatorSignature,
    /// The implementing function; `None` for host built-ins
    pub function: Option<Oid>,
    /// Owning extension; `None` for built-ins
    pub owner: Option<Identifier>,
}

/// Whether a family member is an operator or a support function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemberKind {
    /// An operator in a strategy slot
    Operator,
    /// A support function in a support slot
    Support,
}

/// One entry of an operator family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    /// Operator or support function
    pub kind: MemberKind,
    /// Strategy number for operators, support number for functions
    pub number: u16,
    /// Left input type
    pub left: ColumnType,
    /// Right input type
    pub right: ColumnType,
    /// The operator's or function's catalog id
    pub object: Oid,
    /// Owning extension; `None` for built-ins
    pub owner: Option<Identifier>,
}

impl FamilyMember {
    /// Two members of one family may not share a slot.
    #[must_use]
    pub fn slot(&self) -> (MemberKind, u16, ColumnType, ColumnType) {
        (self.kind, self.number, self.left, self.right)
    }
}
