use super::{FamilyKey, OperatorSignature};
use crate::{
    base::database::{ColumnType, Oid},
    sql::EvaluationError,
};
use numcmp_parser::Identifier;
use snafu::Snafu;

/// Errors raised by catalog changes and lookups.
///
/// Every failed change leaves the catalog exactly as it was.
#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A function with the same name and argument types already exists
    #[snafu(display("function {name} already exists"))]
    DuplicateFunction {
        /// Function name
        name: String,
    },

    /// An operator with the same symbol and operand types already exists
    #[snafu(display("operator {signature} already exists"))]
    DuplicateOperator {
        /// The clashing signature
        signature: OperatorSignature,
    },

    /// The family already has a member in this slot
    #[snafu(display(
        "{family} already has a member for slot {number} on ({left}, {right})"
    ))]
    DuplicateFamilyMember {
        /// The family
        family: FamilyKey,
        /// Strategy or support number
        number: u16,
        /// Left input type
        left: ColumnType,
        /// Right input type
        right: ColumnType,
    },

    /// No function with this name and argument types exists
    #[snafu(display("function {name} does not exist"))]
    UnknownFunction {
        /// Function name
        name: String,
    },

    /// No operator with this signature exists
    #[snafu(display("operator {signature} does not exist"))]
    UnknownOperator {
        /// The missing signature
        signature: OperatorSignature,
    },

    /// No operator has this catalog id
    #[snafu(display("no operator has oid {oid}"))]
    UnknownOperatorOid {
        /// The id
        oid: Oid,
    },

    /// No function has this catalog id
    #[snafu(display("no function has oid {oid}"))]
    UnknownFunctionOid {
        /// The id
        oid: Oid,
    },

    /// The extension is already installed
    #[snafu(display("extension {name} is already installed"))]
    ExtensionAlreadyInstalled {
        /// Extension name
        name: Identifier,
    },

    /// The extension is not installed
    #[snafu(display("extension {name} is not installed"))]
    ExtensionNotInstalled {
        /// Extension name
        name: Identifier,
    },

    /// The object is implemented natively by the host and cannot be invoked here
    #[snafu(display("oid {oid} is a host built-in and has no callable body"))]
    NotCallable {
        /// The id
        oid: Oid,
    },

    /// The routine rejected its arguments
    #[snafu(transparent)]
    Evaluation {
        /// The underlying error
        source: EvaluationError,
    },

    /// An extension's drop hook failed
    #[snafu(display("drop hook for extension {name} failed: {message}"))]
    ExtensionHookFailed {
        /// Extension name
        name: Identifier,
        /// The hook's message
        message: String,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
