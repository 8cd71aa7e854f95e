//! # Catalog State
//!
//! Holds the product mirror behind a read-mostly lock.
//!
//! The catalog is replaced wholesale on every fetch - there is no
//! in-place patching - so readers either see the previous snapshot or the
//! new one, never a half-merged mixture.

use std::sync::RwLock;

use aishaura_core::catalog::Catalog;

/// Shell-managed catalog state.
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: RwLock<Catalog>,
}

impl CatalogState {
    /// Starts empty; [`Self::replace`] installs the first fetch.
    pub fn new() -> Self {
        CatalogState {
            catalog: RwLock::new(Catalog::empty()),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.read().expect("Catalog lock poisoned");
        f(&catalog)
    }

    /// Installs a freshly fetched catalog, dropping the old one.
    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.catalog.write().expect("Catalog lock poisoned");
        *guard = catalog;
    }
}
