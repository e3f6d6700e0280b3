use crate::base::database::ColumnType;
use numcmp_parser::Identifier;
use serde::{Deserialize, Serialize};

/// Reference to a column of the relation a predicate is evaluated against.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    column_id: Identifier,
    column_type: ColumnType,
}

impl ColumnRef {
    /// Create a new `ColumnRef` from a column identifier and column type
    #[must_use]
    pub fn new(column_id: Identifier, column_type: ColumnType) -> Self {
        Self {
            column_id,
            column_type,
        }
    }

    /// Returns the column identifier of this column
    #[must_use]
    pub fn column_id(&self) -> Identifier {
        self.column_id
    }

    /// Returns the column type of this column
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}
