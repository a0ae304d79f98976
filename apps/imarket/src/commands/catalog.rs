//! # Catalog Commands
//!
//! Loading the product feed into the session.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_catalog                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogClient::fetch_products()  (no lock held while awaiting)         │
//! │       │                                                                 │
//! │       ├── Ok(products) ──► catalog.replace(products)                    │
//! │       │                                                                 │
//! │       └── Err(e) ───────► error! logged, catalog left as it was         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use imarket_catalog::{CatalogClient, CatalogResult};
use imarket_core::Product;
use serde::Serialize;
use tracing::{error, info};

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// What the load produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub product_count: usize,
}

/// Fetches the product feed and replaces the catalog with it.
///
/// On failure the error is logged and returned; the catalog keeps whatever
/// it held before (empty at startup).
pub async fn load_catalog(
    catalog: &CatalogState,
    config: &ConfigState,
) -> Result<LoadSummary, ApiError> {
    info!(url = %config.catalog_url, "load_catalog command");

    let products = match fetch(config).await {
        Ok(products) => products,
        Err(e) => {
            error!(error = %e, "Failed to load catalog");
            return Err(e.into());
        }
    };

    let product_count = products.len();
    catalog.with_catalog_mut(|c| c.replace(products));

    Ok(LoadSummary { product_count })
}

async fn fetch(config: &ConfigState) -> CatalogResult<Vec<Product>> {
    let client = CatalogClient::new(config.catalog_config())?;
    client.fetch_products().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use tokio::net::TcpListener;

    const FEED: &str = r#"{
        "products": [
            { "id": 1, "title": "Kiwi", "category": "groceries", "price": 2.49, "stock": 99 },
            { "id": 2, "title": "Lemon", "category": "groceries", "price": 0.79, "discountPercentage": 10 },
            { "id": 3, "title": "Ghost", "category": "groceries", "price": 1, "discountPercentage": 140 }
        ],
        "total": 3, "skip": 0, "limit": 30
    }"#;

    async fn serve(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/products", get(move || async move { (status, body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/products", addr)
    }

    #[tokio::test]
    async fn test_load_catalog_replaces_products() {
        let config = ConfigState::default().with_catalog_url(serve(StatusCode::OK, FEED).await);
        let catalog = CatalogState::new();

        let summary = load_catalog(&catalog, &config).await.unwrap();

        // Product 3 has an out-of-range discount and is dropped.
        assert_eq!(summary.product_count, 2);
        let titles: Vec<String> =
            catalog.with_catalog(|c| c.products().iter().map(|p| p.title.clone()).collect());
        assert_eq!(titles, vec!["Kiwi", "Lemon"]);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_catalog_empty() {
        let config = ConfigState::default()
            .with_catalog_url(serve(StatusCode::INTERNAL_SERVER_ERROR, "oops").await);
        let catalog = CatalogState::new();

        let err = load_catalog(&catalog, &config).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert!(catalog.with_catalog(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_malformed_feed() {
        let config =
            ConfigState::default().with_catalog_url(serve(StatusCode::OK, "<html>").await);
        let catalog = CatalogState::new();

        let err = load_catalog(&catalog, &config).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert_eq!(err.message, "Catalog data was malformed");
    }
}
