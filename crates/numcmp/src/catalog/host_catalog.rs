use super::{
    builtin, CatalogError, CatalogListener, CatalogResult, ExtensionDropHook, FamilyKey,
    FamilyMember, FunctionEntry, MemberKind, OperatorEntry, OperatorSignature, RegistrationBatch,
    RegistrationOp,
};
use crate::{
    base::{
        database::{ColumnType, LiteralValue, Oid},
        map::{IndexMap, IndexSet},
    },
    sql::{Routine, RoutineOutput},
};
use numcmp_parser::Identifier;
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

/// The committed contents of a [`Catalog`].
///
/// Changes are staged on a clone and swapped in whole, so readers never see half a batch.
#[derive(Debug, Clone)]
pub(super) struct CatalogState {
    pub(super) version: u64,
    next_oid: u32,
    pub(super) functions: IndexMap<Oid, FunctionEntry>,
    pub(super) operators: IndexMap<Oid, OperatorEntry>,
    pub(super) families: IndexMap<FamilyKey, Vec<FamilyMember>>,
    extensions: IndexSet<Identifier>,
}

impl CatalogState {
    fn bootstrap() -> Self {
        let mut state = Self {
            version: 0,
            next_oid: Oid::FIRST_NORMAL.0,
            functions: IndexMap::default(),
            operators: IndexMap::default(),
            families: IndexMap::default(),
            extensions: IndexSet::default(),
        };
        builtin::populate(&mut state);
        state
    }

    fn allocate_oid(&mut self) -> Oid {
        let oid = Oid(self.next_oid);
        self.next_oid += 1;
        oid
    }

    fn function_by_signature(&self, name: &str, argument_types: &[ColumnType]) -> Option<Oid> {
        self.functions
            .values()
            .find(|function| function.name == name && function.argument_types == argument_types)
            .map(|function| function.oid)
    }

    fn operator_by_signature(&self, signature: &OperatorSignature) -> Option<Oid> {
        self.operators
            .values()
            .find(|operator| operator.signature == *signature)
            .map(|operator| operator.oid)
    }

    fn add_member(&mut self, family: FamilyKey, member: FamilyMember) -> CatalogResult<()> {
        let members = self.families.entry(family).or_default();
        if members.iter().any(|existing| existing.slot() == member.slot()) {
            return Err(CatalogError::DuplicateFamilyMember {
                family,
                number: member.number,
                left: member.left,
                right: member.right,
            });
        }
        members.push(member);
        Ok(())
    }

    fn apply(&mut self, owner: &Identifier, operation: &RegistrationOp) -> CatalogResult<()> {
        match operation {
            RegistrationOp::CreateFunction { routine } => {
                let name = routine.name();
                let argument_types = routine.argument_types();
                if self.function_by_signature(&name, &argument_types).is_some() {
                    return Err(CatalogError::DuplicateFunction { name });
                }
                let oid = self.allocate_oid();
                self.functions.insert(
                    oid,
                    FunctionEntry {
                        oid,
                        name,
                        argument_types,
                        routine: Some(*routine),
                        owner: Some(*owner),
                    },
                );
            }
            RegistrationOp::CreateOperator {
                signature,
                function,
            } => {
                if self.operator_by_signature(signature).is_some() {
                    return Err(CatalogError::DuplicateOperator {
                        signature: *signature,
                    });
                }
                let function = self
                    .function_by_signature(function, &[signature.left, signature.right])
                    .ok_or_else(|| CatalogError::UnknownFunction {
                        name: function.clone(),
                    })?;
                let oid = self.allocate_oid();
                self.operators.insert(
                    oid,
                    OperatorEntry {
                        oid,
                        signature: *signature,
                        function: Some(function),
                        owner: Some(*owner),
                    },
                );
            }
            RegistrationOp::AddOperatorToFamily {
                family,
                strategy,
                signature,
            } => {
                let object = self.operator_by_signature(signature).ok_or(
                    CatalogError::UnknownOperator {
                        signature: *signature,
                    },
                )?;
                self.add_member(
                    *family,
                    FamilyMember {
                        kind: MemberKind::Operator,
                        number: *strategy,
                        left: signature.left,
                        right: signature.right,
                        object,
                        owner: Some(*owner),
                    },
                )?;
            }
            RegistrationOp::AddSupportToFamily {
                family,
                number,
                left,
                right,
                function,
                argument_types,
            } => {
                let object = self
                    .function_by_signature(function, argument_types)
                    .ok_or_else(|| CatalogError::UnknownFunction {
                        name: function.clone(),
                    })?;
                self.add_member(
                    *family,
                    FamilyMember {
                        kind: MemberKind::Support,
                        number: *number,
                        left: *left,
                        right: *right,
                        object,
                        owner: Some(*owner),
                    },
                )?;
            }
        }
        Ok(())
    }

    fn remove_owned_by(&mut self, owner: &Identifier) -> RemovalSummary {
        let owned = |entry_owner: &Option<Identifier>| entry_owner.as_ref() == Some(owner);
        let mut summary = RemovalSummary::default();
        for members in self.families.values_mut() {
            let before = members.len();
            members.retain(|member| !owned(&member.owner));
            summary.family_members += before - members.len();
        }
        let before = self.operators.len();
        self.operators.retain(|_, operator| !owned(&operator.owner));
        summary.operators = before - self.operators.len();
        let before = self.functions.len();
        self.functions.retain(|_, function| !owned(&function.owner));
        summary.functions = before - self.functions.len();
        summary
    }
}

/// Counts of the objects removed with an extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Functions removed
    pub functions: usize,
    /// Operators removed
    pub operators: usize,
    /// Family members removed
    pub family_members: usize,
}

/// The host catalog.
///
/// Reads take a shared lock. Every change is a single atomic transaction that bumps
/// [`Catalog::version`] and, once committed and unlocked, notifies every subscribed
/// [`CatalogListener`].
pub struct Catalog {
    state: RwLock<CatalogState>,
    listeners: Mutex<Vec<Weak<dyn CatalogListener>>>,
    drop_hooks: Mutex<IndexMap<Identifier, Weak<dyn ExtensionDropHook>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl Catalog {
    /// A catalog holding only the host's built-in objects.
    #[must_use]
    pub fn bootstrap() -> Self {
        Self {
            state: RwLock::new(CatalogState::bootstrap()),
            listeners: Mutex::new(Vec::new()),
            drop_hooks: Mutex::new(IndexMap::default()),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&CatalogState) -> T) -> T {
        f(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Stages `f` on a copy of the state and commits it only if it succeeds.
    fn transact<T>(
        &self,
        f: impl FnOnce(&mut CatalogState) -> CatalogResult<T>,
    ) -> CatalogResult<T> {
        let (result, version) = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let mut staged = state.clone();
            let result = f(&mut staged)?;
            staged.version += 1;
            *state = staged;
            (result, state.version)
        };
        self.broadcast(version);
        Ok(result)
    }

    fn broadcast(&self, version: u64) {
        let live: Vec<_> = {
            let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.retain(|listener| listener.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        tracing::trace!(version, listeners = live.len(), "broadcasting catalog invalidation");
        for listener in live {
            listener.on_catalog_invalidated(version);
        }
    }

    /// Number of committed changes since bootstrap.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.read(|state| state.version)
    }

    /// Subscribes to invalidation broadcasts. Dropped listeners are pruned.
    pub fn subscribe(&self, listener: Weak<dyn CatalogListener>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Registers the hook [`Catalog::drop_extension`] calls for `extension`.
    ///
    /// The hook stays registered across drops and reinstalls until it is dropped.
    pub fn register_drop_hook(&self, extension: Identifier, hook: Weak<dyn ExtensionDropHook>) {
        let mut hooks = self.drop_hooks.lock().unwrap_or_else(PoisonError::into_inner);
        hooks.retain(|_, hook| hook.strong_count() > 0);
        hooks.insert(extension, hook);
    }

    fn live_drop_hook(&self, extension: &Identifier) -> Option<Arc<dyn ExtensionDropHook>> {
        let mut hooks = self.drop_hooks.lock().unwrap_or_else(PoisonError::into_inner);
        hooks.retain(|_, hook| hook.strong_count() > 0);
        hooks.get(extension).and_then(Weak::upgrade)
    }

    /// Installs `batch.owner()` and applies every operation of `batch`, all or nothing.
    ///
    /// # Errors
    /// Fails if the extension is already installed or any operation conflicts with
    /// an existing object. The catalog is unchanged on failure.
    pub fn create_extension(&self, batch: &RegistrationBatch) -> CatalogResult<()> {
        let owner = *batch.owner();
        self.transact(|state| {
            if !state.extensions.insert(owner) {
                return Err(CatalogError::ExtensionAlreadyInstalled { name: owner });
            }
            batch
                .operations()
                .iter()
                .try_for_each(|operation| state.apply(&owner, operation))
        })
    }

    /// Removes every object owned by `extension` and uninstalls it, in one transaction.
    ///
    /// # Errors
    /// Fails with [`CatalogError::ExtensionNotInstalled`] if it is not installed.
    pub fn remove_extension_objects(
        &self,
        extension: &Identifier,
    ) -> CatalogResult<RemovalSummary> {
        self.transact(|state| {
            if !state.extensions.shift_remove(extension) {
                return Err(CatalogError::ExtensionNotInstalled { name: *extension });
            }
            Ok(state.remove_owned_by(extension))
        })
    }

    /// Drops `extension` the way the host's `DROP EXTENSION` does.
    ///
    /// The registered drop hook runs first, with no locks held. Whatever it leaves
    /// behind is removed afterwards.
    ///
    /// # Errors
    /// Fails if the extension is not installed or the hook fails.
    pub fn drop_extension(&self, extension: &Identifier) -> CatalogResult<()> {
        if !self.extension_installed(extension) {
            return Err(CatalogError::ExtensionNotInstalled { name: *extension });
        }
        if let Some(hook) = self.live_drop_hook(extension) {
            hook.on_extension_dropped(self)
                .map_err(|message| CatalogError::ExtensionHookFailed {
                    name: *extension,
                    message,
                })?;
        }
        if self.extension_installed(extension) {
            self.remove_extension_objects(extension)?;
        }
        Ok(())
    }

    /// Whether `extension` is installed.
    #[must_use]
    pub fn extension_installed(&self, extension: &Identifier) -> bool {
        self.read(|state| state.extensions.contains(extension))
    }

    /// The catalog id of the operator with this signature.
    #[must_use]
    pub fn lookup_operator(&self, signature: &OperatorSignature) -> Option<Oid> {
        self.read(|state| state.operator_by_signature(signature))
    }

    /// Resolves many signatures under one read lock, together with the version they
    /// were resolved at.
    #[must_use]
    pub fn resolve_operators(&self, signatures: &[OperatorSignature]) -> (u64, Vec<Option<Oid>>) {
        self.read(|state| {
            let oids = signatures
                .iter()
                .map(|signature| state.operator_by_signature(signature))
                .collect();
            (state.version, oids)
        })
    }

    /// The catalog id of the function `name(argument_types)`.
    #[must_use]
    pub fn lookup_function(&self, name: &str, argument_types: &[ColumnType]) -> Option<Oid> {
        self.read(|state| state.function_by_signature(name, argument_types))
    }

    /// The operator with id `oid`.
    #[must_use]
    pub fn operator(&self, oid: Oid) -> Option<OperatorEntry> {
        self.read(|state| state.operators.get(&oid).cloned())
    }

    /// The function with id `oid`.
    #[must_use]
    pub fn function(&self, oid: Oid) -> Option<FunctionEntry> {
        self.read(|state| state.functions.get(&oid).cloned())
    }

    /// Every operator owned by `extension`.
    #[must_use]
    pub fn operators_owned_by(&self, extension: &Identifier) -> Vec<OperatorEntry> {
        self.read(|state| {
            state
                .operators
                .values()
                .filter(|operator| operator.owner.as_ref() == Some(extension))
                .cloned()
                .collect()
        })
    }

    /// Every function owned by `extension`.
    #[must_use]
    pub fn functions_owned_by(&self, extension: &Identifier) -> Vec<FunctionEntry> {
        self.read(|state| {
            state
                .functions
                .values()
                .filter(|function| function.owner.as_ref() == Some(extension))
                .cloned()
                .collect()
        })
    }

    /// The members of `family`, in insertion order.
    #[must_use]
    pub fn family_members(&self, family: &FamilyKey) -> Vec<FamilyMember> {
        self.read(|state| state.families.get(family).cloned().unwrap_or_default())
    }

    /// Number of members of `family`, restricted to those owned by `owner` if given.
    #[must_use]
    pub fn count_family_members(&self, family: &FamilyKey, owner: Option<&Identifier>) -> usize {
        self.read(|state| {
            state.families.get(family).map_or(0, |members| {
                members
                    .iter()
                    .filter(|member| owner.is_none() || member.owner.as_ref() == owner)
                    .count()
            })
        })
    }

    /// Calls the function with id `oid`.
    ///
    /// # Errors
    /// Fails if there is no such function, it is a host built-in, or it rejects
    /// the arguments.
    pub fn invoke_function(
        &self,
        oid: Oid,
        arguments: &[LiteralValue],
    ) -> CatalogResult<RoutineOutput> {
        let routine = self
            .function(oid)
            .ok_or(CatalogError::UnknownFunctionOid { oid })?
            .routine
            .ok_or(CatalogError::NotCallable { oid })?;
        Ok(routine.invoke(arguments)?)
    }

    /// Evaluates `left OP right` for the operator with id `oid`.
    ///
    /// # Errors
    /// Fails if there is no such operator, it is a host built-in, or it rejects
    /// the operands.
    pub fn invoke_operator(
        &self,
        oid: Oid,
        left: &LiteralValue,
        right: &LiteralValue,
    ) -> CatalogResult<bool> {
        let function = self
            .operator(oid)
            .ok_or(CatalogError::UnknownOperatorOid { oid })?
            .function
            .ok_or(CatalogError::NotCallable { oid })?;
        let routine: Option<Routine> = self.function(function).and_then(|entry| entry.routine);
        let Some(Routine::Operator(operator)) = routine else {
            return Err(CatalogError::NotCallable { oid });
        };
        Ok(operator.evaluate(left, right)?)
    }
}
