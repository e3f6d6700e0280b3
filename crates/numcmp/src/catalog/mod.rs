//! An in-memory model of the host catalog: functions, operators and operator
//! families, with the host's transactional, invalidation and extension semantics.
mod catalog_entry;
pub use catalog_entry::{
    AccessMethod, FamilyKey, FamilyMember, FamilyName, FunctionEntry, MemberKind, OperatorEntry,
    OperatorSignature,
};

mod catalog_error;
pub use catalog_error::{CatalogError, CatalogResult};

mod ddl;
pub use ddl::{RegistrationBatch, RegistrationOp};

mod builtin;
pub use builtin::native_operator_oid;

mod catalog_listener;
pub use catalog_listener::{CatalogListener, ExtensionDropHook};

mod host_catalog;
pub use host_catalog::{Catalog, RemovalSummary};
