//! # Catalog State
//!
//! The product list and the current search term.
//!
//! The catalog is read by almost every command and written only when the
//! feed loads or a favorite flips, so it sits behind an `RwLock`.

use std::sync::{Arc, PoisonError, RwLock};

use imarket_core::{Catalog, Product};

/// Shared catalog state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<RwLock<Catalog>>,
    search_term: Arc<RwLock<String>>,
}

impl CatalogState {
    /// Creates an empty catalog with no search term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state preloaded with products.
    pub fn with_products(products: Vec<Product>) -> Self {
        CatalogState {
            catalog: Arc::new(RwLock::new(Catalog::new(products))),
            search_term: Arc::default(),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }

    pub fn search_term(&self) -> String {
        self.search_term
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_search_term(&self, term: String) {
        *self.search_term.write().unwrap_or_else(PoisonError::into_inner) = term;
    }
}
