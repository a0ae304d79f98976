//! # Catalog Configuration
//!
//! The feed endpoint and request limits. iMarket has no configuration
//! surface: the values below are compiled in, and [`CatalogConfig`] exists
//! so tests can point the client at a local server.

use std::time::Duration;

use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Public product feed.
pub const CATALOG_URL: &str = "https://dummyjson.com/products";

/// Upper bound on the single fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::CatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Full URL of the product feed.
    pub endpoint: String,

    /// Total request timeout.
    pub timeout: Duration,

    /// Sent as the `User-Agent` header.
    pub user_agent: String,
}

impl CatalogConfig {
    /// Replaces the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parses the endpoint, accepting only `http` and `https` URLs.
    pub fn endpoint_url(&self) -> CatalogResult<Url> {
        let url = Url::parse(&self.endpoint).map_err(|e| CatalogError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CatalogError::InvalidEndpoint {
                url: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            endpoint: CATALOG_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("imarket/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
