//! Installing and removing the cross-type operators, and keeping the
//! process-local view of their catalog ids current.
mod identifier_cache;
pub use identifier_cache::IdentifierCache;


mod registration_plan;
pub use registration_plan::{
    registration_plan, PLANNED_FAMILY_MEMBERS, PLANNED_FUNCTIONS, PLANNED_OPERATORS,
};


mod lifecycle_error;
pub use lifecycle_error::{LifecycleError, LifecycleResult};

mod lifecycle_manager;
pub use lifecycle_manager::{LifecycleManager, OperatorCatalogEntry, RegistrationState};
