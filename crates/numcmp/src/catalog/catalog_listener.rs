use super::Catalog;

/// Receives invalidation broadcasts after every committed catalog change.
///
/// Called with no catalog locks held, so implementations may read the catalog.
pub trait CatalogListener: Send + Sync {
    /// The catalog moved to `version`.
    fn on_catalog_invalidated(&self, version: u64);
}

/// Removes an extension's objects when the host drops the extension.
///
/// Called with no catalog locks held. Returning an error aborts the drop.
pub trait ExtensionDropHook: Send + Sync {
    /// The host is dropping the extension this hook was registered for.
    ///
    /// # Errors
    /// Returns a message describing why the extension could not be removed.
    fn on_extension_dropped(&self, catalog: &Catalog) -> Result<(), String>;
}
