use crate::base::database::{ColumnRef, LiteralValue, Oid};

/// An argument of an operator clause as the planner hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A column of the relation being scanned
    Column(ColumnRef),
    /// A planning-time constant; `None` is SQL `NULL`
    Constant(Option<LiteralValue>),
}

/// A binary operator clause `left opno right`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpExpr {
    opno: Oid,
    left: Operand,
    right: Operand,
}

impl OpExpr {
    /// Builds `left opno right`.
    #[must_use]
    pub fn new(opno: Oid, left: Operand, right: Operand) -> Self {
        Self { opno, left, right }
    }

    /// The operator's catalog id.
    #[must_use]
    pub fn opno(&self) -> Oid {
        self.opno
    }

    /// Left argument.
    #[must_use]
    pub fn left(&self) -> &Operand {
        &self.left
    }

    /// Right argument.
    #[must_use]
    pub fn right(&self) -> &Operand {
        &self.right
    }
}
