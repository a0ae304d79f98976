//! # Configuration State
//!
//! Stores application configuration fixed at startup.
//!
//! iMarket reads no config files and no application environment
//! variables; every value comes from the compiled-in constants. The struct
//! exists so the renderer can ask for them and tests can swap the feed URL.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use std::time::Duration;

use imarket_catalog::{CatalogConfig, CATALOG_URL};
use imarket_core::{TaxRate, STORE_LOCATION, TAX_RATE};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store the order is picked up from or delivered to.
    pub store_location: String,

    /// Sales tax applied to every cart.
    pub tax_rate: TaxRate,

    /// Product feed URL.
    pub catalog_url: String,

    /// Timeout for the feed request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Location: Cupertino
    /// - Tax: 9.13%
    /// - Feed: dummyjson.com, 30 second timeout
    fn default() -> Self {
        let catalog = CatalogConfig::default();
        ConfigState {
            store_location: STORE_LOCATION.to_string(),
            tax_rate: TAX_RATE,
            catalog_url: CATALOG_URL.to_string(),
            request_timeout_secs: catalog.timeout.as_secs(),
        }
    }
}

impl ConfigState {
    /// Points the feed at another URL.
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// Client settings for the feed.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::default()
            .with_endpoint(self.catalog_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}
