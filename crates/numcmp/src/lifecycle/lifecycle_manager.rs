use super::{registration_plan, IdentifierCache, LifecycleError, LifecycleResult};
use crate::{
    base::database::Oid,
    catalog::{
        Catalog, CatalogError, CatalogListener, ExtensionDropHook, FamilyKey, FamilyMember,
        FamilyName, MemberKind,
    },
    config::{EqualityRegistration, NumcmpConfig, RuntimeSettings},
    sql::{CrossTypeOperator, PlannerSupport},
};
use numcmp_parser::{intermediate_ast::ComparisonOperator, Identifier};
use std::sync::Arc;

/// Whether the cross-type operators are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    /// Nothing is installed
    Unregistered,
    /// Every cross-type object is installed
    Registered,
}

/// The catalog's view of one installed cross-type operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorCatalogEntry {
    /// The operator: symbol, operand types and their order
    pub operator: CrossTypeOperator,
    /// The operator's catalog id
    pub operator_oid: Oid,
    /// The function implementing the comparison
    pub comparison_function: Oid,
    /// For `=`, the integer side's hash support in the operator's hash family
    pub hash_function: Option<Oid>,
    /// Every family the operator belongs to
    pub families: Vec<FamilyKey>,
}

/// Activates and deactivates the cross-type operators for one process.
///
/// The manager owns the process's [`IdentifierCache`] and clears it whenever the
/// catalog broadcasts a change, whichever process made it.
pub struct LifecycleManager {
    catalog: Arc<Catalog>,
    cache: Arc<IdentifierCache>,
    settings: Arc<RuntimeSettings>,
    extension_name: Identifier,
    equality_registration: EqualityRegistration,
}

impl LifecycleManager {
    /// A manager over `catalog`, subscribed to its invalidation broadcasts and
    /// registered as the drop hook for the configured extension.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: &NumcmpConfig) -> Arc<Self> {
        let manager = Arc::new(Self {
            catalog: Arc::clone(&catalog),
            cache: Arc::new(IdentifierCache::new()),
            settings: Arc::new(RuntimeSettings::from_config(config)),
            extension_name: config.extension_name,
            equality_registration: config.equality_registration,
        });
        let weak_manager = Arc::downgrade(&manager);
        catalog.subscribe(weak_manager.clone());
        catalog.register_drop_hook(config.extension_name, weak_manager);
        manager
    }

    /// The catalog this manager installs into.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The process-local identifier cache.
    #[must_use]
    pub fn cache(&self) -> &Arc<IdentifierCache> {
        &self.cache
    }

    /// The live runtime settings.
    #[must_use]
    pub fn settings(&self) -> &Arc<RuntimeSettings> {
        &self.settings
    }

    /// The extension owning the installed objects.
    #[must_use]
    pub fn extension_name(&self) -> Identifier {
        self.extension_name
    }

    /// Current state, as recorded in the catalog.
    #[must_use]
    pub fn state(&self) -> RegistrationState {
        if self.catalog.extension_installed(&self.extension_name) {
            RegistrationState::Registered
        } else {
            RegistrationState::Unregistered
        }
    }

    /// Installs every cross-type function, operator and family membership as one
    /// catalog transaction.
    ///
    /// # Errors
    /// Fails with [`LifecycleError::AlreadyRegistered`] if installed, or with the
    /// catalog's error if any entry conflicts. Nothing is installed on failure.
    #[tracing::instrument(name = "LifecycleManager::activate", level = "debug", skip_all)]
    pub fn activate(&self) -> LifecycleResult<()> {
        let batch = registration_plan(self.extension_name, self.equality_registration);
        match self.catalog.create_extension(&batch) {
            Ok(()) => {}
            Err(CatalogError::ExtensionAlreadyInstalled { name }) => {
                tracing::warn!(extension = %name, "rejected activation of a registered extension");
                return Err(LifecycleError::AlreadyRegistered { name });
            }
            Err(error) => {
                tracing::warn!(extension = %self.extension_name, %error, "catalog rejected activation");
                return Err(error.into());
            }
        }
        tracing::info!(
            extension = %self.extension_name,
            functions = batch.function_count(),
            operators = batch.operator_count(),
            family_members = batch.family_member_count(),
            "registered cross-type operators"
        );
        Ok(())
    }

    /// Removes every object [`LifecycleManager::activate`] installed and checks that
    /// no family still holds an entry owned by the extension.
    ///
    /// # Errors
    /// Fails with [`LifecycleError::NotRegistered`] if not installed, or with
    /// [`LifecycleError::ResidualEntries`] if the post-condition does not hold.
    #[tracing::instrument(name = "LifecycleManager::deactivate", level = "debug", skip_all)]
    pub fn deactivate(&self) -> LifecycleResult<()> {
        let summary = match self.catalog.remove_extension_objects(&self.extension_name) {
            Ok(summary) => summary,
            Err(CatalogError::ExtensionNotInstalled { name }) => {
                return Err(LifecycleError::NotRegistered { name });
            }
            Err(error) => return Err(error.into()),
        };
        self.cache.invalidate();
        for family in FamilyKey::all() {
            let count = self
                .catalog
                .count_family_members(&family, Some(&self.extension_name));
            if count != 0 {
                return Err(LifecycleError::ResidualEntries { family, count });
            }
        }
        tracing::info!(
            extension = %self.extension_name,
            functions = summary.functions,
            operators = summary.operators,
            family_members = summary.family_members,
            "removed cross-type operators"
        );
        Ok(())
    }

    /// Drops the identifier cache; the next lookup re-resolves against the catalog.
    pub fn on_catalog_invalidated(&self) {
        self.cache.invalidate();
    }

    /// The planner hook for this process.
    #[must_use]
    pub fn planner_support(&self) -> PlannerSupport {
        PlannerSupport::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.cache),
            Arc::clone(&self.settings),
        )
    }

    /// The installed cross-type operators with their functions and families, in
    /// registration order. Empty when unregistered.
    #[must_use]
    pub fn catalog_entries(&self) -> Vec<OperatorCatalogEntry> {
        let families: Vec<_> = FamilyKey::all()
            .into_iter()
            .map(|family| (family, self.catalog.family_members(&family)))
            .collect();
        CrossTypeOperator::all()
            .filter_map(|operator| {
                let operator_oid = self.cache.operator_oid(&self.catalog, &operator)?;
                let comparison_function = self.catalog.operator(operator_oid)?.function?;
                let member_of = families
                    .iter()
                    .filter(|(_, members)| {
                        members.iter().any(|member| {
                            member.kind == MemberKind::Operator && member.object == operator_oid
                        })
                    })
                    .map(|(family, _)| *family)
                    .collect();
                let hash_function = if operator.operator() == ComparisonOperator::Equal {
                    self.hash_support(&families, &operator)
                } else {
                    None
                };
                Some(OperatorCatalogEntry {
                    operator,
                    operator_oid,
                    comparison_function,
                    hash_function,
                    families: member_of,
                })
            })
            .collect()
    }

    /// The integer side's hash support in the hash family of `operator`.
    fn hash_support(
        &self,
        families: &[(FamilyKey, Vec<FamilyMember>)],
        operator: &CrossTypeOperator,
    ) -> Option<Oid> {
        let hash_family = FamilyKey::hash(FamilyName::of_inexact(operator.inexact_type()));
        let integer = operator.integer_type().column_type();
        families
            .iter()
            .find(|(family, _)| *family == hash_family)?
            .1
            .iter()
            .find(|member| {
                member.kind == MemberKind::Support
                    && member.number == 1
                    && member.left == integer
                    && member.owner == Some(self.extension_name)
            })
            .map(|member| member.object)
    }
}

impl CatalogListener for LifecycleManager {
    fn on_catalog_invalidated(&self, version: u64) {
        tracing::debug!(version, "catalog changed");
        LifecycleManager::on_catalog_invalidated(self);
    }
}

impl ExtensionDropHook for LifecycleManager {
    fn on_extension_dropped(&self, _catalog: &Catalog) -> Result<(), String> {
        self.deactivate().map_err(|error| error.to_string())
    }
}
