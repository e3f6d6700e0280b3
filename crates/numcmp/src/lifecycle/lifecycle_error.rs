use crate::catalog::{CatalogError, FamilyKey};
use numcmp_parser::Identifier;
use snafu::Snafu;

/// Errors from activating or deactivating the cross-type operators.
#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    /// `activate` was called while the operators are registered
    #[snafu(display("extension {name} is already registered"))]
    AlreadyRegistered {
        /// Extension name
        name: Identifier,
    },

    /// `deactivate` was called while the operators are not registered
    #[snafu(display("extension {name} is not registered"))]
    NotRegistered {
        /// Extension name
        name: Identifier,
    },

    /// The catalog rejected the change
    #[snafu(transparent)]
    Catalog {
        /// The underlying error
        source: CatalogError,
    },

    /// Entries owned by the extension survived removal
    #[snafu(display("{count} entries owned by the extension remain in {family}"))]
    ResidualEntries {
        /// The family still holding entries
        family: FamilyKey,
        /// How many remain
        count: usize,
    },
}

/// Result type for lifecycle operations
pub type LifecycleResult<T> = Result<T, LifecycleError>;
