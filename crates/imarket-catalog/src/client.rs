//! # Catalog Client
//!
//! One GET against the product feed, no retries and no pagination. The
//! feed's first page is the whole catalog.

use imarket_core::{Product, ProductFeed};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::ingest::ingest;

/// HTTP client for the product feed.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a client from the given settings.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.endpoint_url()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Fetches and decodes the raw feed.
    pub async fn fetch_feed(&self) -> CatalogResult<ProductFeed> {
        let url = self.config.endpoint_url()?;
        debug!(url = %url, "Fetching product feed");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), url = %self.config.endpoint, "Product feed request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.config.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        let feed: ProductFeed = serde_json::from_slice(&body)?;

        debug!(
            products = feed.products.len(),
            total = feed.total,
            "Decoded product feed"
        );
        Ok(feed)
    }

    /// Fetches the feed and returns only the products that pass validation.
    pub async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let feed = self.fetch_feed().await?;
        let (products, report) = ingest(feed);

        info!(
            accepted = report.accepted,
            rejected = report.rejected,
            duplicates = report.duplicates,
            reviews_dropped = report.reviews_dropped,
            "Catalog loaded"
        );
        Ok(products)
    }
}

// =============================================================================
// Tests
// =============================================================================
