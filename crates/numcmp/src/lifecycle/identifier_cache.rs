use crate::{
    base::{database::Oid, map::IndexMap},
    catalog::{Catalog, OperatorSignature},
    sql::CrossTypeOperator,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, PoisonError, RwLock,
};

/// One resolution of every cross-type operator against the catalog.
#[derive(Debug, Default)]
pub(super) struct ResolvedOperators {
    pub(super) by_oid: IndexMap<Oid, CrossTypeOperator>,
    pub(super) by_signature: IndexMap<OperatorSignature, Oid>,
}

impl ResolvedOperators {
    pub(super) fn resolve(catalog: &Catalog) -> Self {
        let operators: Vec<_> = CrossTypeOperator::all().collect();
        let signatures: Vec<_> = operators.iter().map(OperatorSignature::from).collect();
        let (_, oids) = catalog.resolve_operators(&signatures);
        let mut resolved = Self::default();
        for ((operator, signature), oid) in operators.into_iter().zip(signatures).zip(oids) {
            if let Some(oid) = oid {
                resolved.by_oid.insert(oid, operator);
                resolved.by_signature.insert(signature, oid);
            }
        }
        resolved
    }
}

/// Process-local map between cross-type operators and their catalog ids.
///
/// Populated lazily on first use and dropped wholesale by [`IdentifierCache::invalidate`].
/// A population that raced with an invalidation is used once and not kept, so an
/// id resolved before a catalog change never outlives that change's broadcast.
#[derive(Debug, Default)]
pub struct IdentifierCache {
    resolved: RwLock<Option<Arc<ResolvedOperators>>>,
    generation: AtomicU64,
}

impl IdentifierCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached id.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let previous = self
            .resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        tracing::debug!(
            was_populated = previous.is_some(),
            "invalidated operator identifier cache"
        );
    }

    /// Whether ids are currently cached.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn resolved(&self, catalog: &Catalog) -> Arc<ResolvedOperators> {
        self.resolved_with(|| ResolvedOperators::resolve(catalog))
    }

    /// The cached resolution, or the result of `resolve`, which is kept only if no
    /// invalidation happened while it ran.
    pub(super) fn resolved_with(
        &self,
        resolve: impl FnOnce() -> ResolvedOperators,
    ) -> Arc<ResolvedOperators> {
        if let Some(resolved) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(resolved);
        }
        let generation = self.generation.load(Ordering::SeqCst);
        let resolved = Arc::new(resolve());
        let mut slot = self.resolved.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() && self.generation.load(Ordering::SeqCst) == generation {
            tracing::debug!(
                operators = resolved.by_oid.len(),
                "populated operator identifier cache"
            );
            *slot = Some(Arc::clone(&resolved));
        }
        resolved
    }

    /// The cross-type operator with catalog id `opno`, if it is one.
    #[must_use]
    pub fn lookup(&self, catalog: &Catalog, opno: Oid) -> Option<CrossTypeOperator> {
        self.resolved(catalog).by_oid.get(&opno).copied()
    }

    /// The catalog id of `operator`, if it is registered.
    #[must_use]
    pub fn operator_oid(&self, catalog: &Catalog, operator: &CrossTypeOperator) -> Option<Oid> {
        self.resolved(catalog)
            .by_signature
            .get(&OperatorSignature::from(operator))
            .copied()
    }
}
