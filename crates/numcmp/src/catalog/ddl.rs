use super::{FamilyKey, OperatorSignature};
use crate::{base::database::ColumnType, sql::Routine};
use numcmp_parser::Identifier;

/// One catalog change inside a [`RegistrationBatch`].
///
/// Later operations refer to functions and operators created earlier in the same
/// batch by name and signature, the way the host's DDL does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOp {
    /// Create a function with `routine` as its body
    CreateFunction {
        /// The function body; its name and argument types come from the routine
        routine: Routine,
    },
    /// Create an operator implemented by the function `function(left, right)`
    CreateOperator {
        /// Symbol and operand types
        signature: OperatorSignature,
        /// Name of the implementing function
        function: String,
    },
    /// Add an existing operator to a family under a strategy number
    AddOperatorToFamily {
        /// Target family
        family: FamilyKey,
        /// Strategy number
        strategy: u16,
        /// The operator
        signature: OperatorSignature,
    },
    /// Add an existing function to a family as support routine `number`
    AddSupportToFamily {
        /// Target family
        family: FamilyKey,
        /// Support number
        number: u16,
        /// Left input type of the slot
        left: ColumnType,
        /// Right input type of the slot
        right: ColumnType,
        /// Name of the function
        function: String,
        /// Argument types of the function
        argument_types: Vec<ColumnType>,
    },
}

/// An ordered list of catalog changes owned by one extension, applied all or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationBatch {
    owner: Identifier,
    operations: Vec<RegistrationOp>,
}

impl RegistrationBatch {
    /// An empty batch for the extension `owner`.
    #[must_use]
    pub fn new(owner: Identifier) -> Self {
        Self {
            owner,
            operations: Vec::new(),
        }
    }

    /// The extension that will own every object the batch creates.
    #[must_use]
    pub fn owner(&self) -> &Identifier {
        &self.owner
    }

    /// Appends an operation.
    pub fn push(&mut self, operation: RegistrationOp) {
        self.operations.push(operation);
    }

    /// The operations in application order.
    #[must_use]
    pub fn operations(&self) -> &[RegistrationOp] {
        &self.operations
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the batch has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of functions the batch creates.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.count(|operation| matches!(operation, RegistrationOp::CreateFunction { .. }))
    }

    /// Number of operators the batch creates.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        self.count(|operation| matches!(operation, RegistrationOp::CreateOperator { .. }))
    }

    /// Number of family members the batch adds.
    #[must_use]
    pub fn family_member_count(&self) -> usize {
        self.count(|operation| {
            matches!(
                operation,
                RegistrationOp::AddOperatorToFamily { .. } | RegistrationOp::AddSupportToFamily { .. }
            )
        })
    }

    fn count(&self, predicate: impl Fn(&RegistrationOp) -> bool) -> usize {
        self.operations.iter().filter(|operation| predicate(operation)).count()
    }
}
