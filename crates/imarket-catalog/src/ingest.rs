//! # Feed Ingestion
//!
//! Turns a decoded [`ProductFeed`] into the product list the app holds.
//!
//! ```text
//! ProductFeed.products
//!        │
//!        ├── duplicate id?        ──► dropped (first one wins)
//!        ├── validate_product()   ──► dropped on error
//!        └── per review:
//!              validate_review()  ──► review dropped on error
//!        │
//!        ▼
//! Vec<Product>   (feed order preserved)
//! ```
//!
//! Nothing here fails: a bad record is logged and skipped so one broken
//! product never empties the whole catalog.

use std::collections::HashSet;

use imarket_core::validation::{validate_product, validate_review, ValidationResult};
use imarket_core::{Product, ProductFeed, ValidationError};
use tracing::{debug, warn};

/// Outcome counts from one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub rejected: usize,
    pub duplicates: usize,
    pub reviews_dropped: usize,
}

/// Validates every product in the feed, returning the survivors in feed
/// order together with a count of what was dropped.
pub fn ingest(feed: ProductFeed) -> (Vec<Product>, IngestReport) {
    let mut report = IngestReport::default();
    let mut seen = HashSet::with_capacity(feed.products.len());
    let mut products = Vec::with_capacity(feed.products.len());

    for mut product in feed.products {
        if let Err(e) = check_unique(&mut seen, product.id) {
            warn!(product_id = product.id, error = %e, "Duplicate product in feed, skipping");
            report.duplicates += 1;
            continue;
        }

        if let Err(e) = validate_product(&product) {
            warn!(product_id = product.id, error = %e, "Rejected product from feed");
            report.rejected += 1;
            continue;
        }

        let before = product.reviews.len();
        product.reviews.retain(|review| match validate_review(review) {
            Ok(()) => true,
            Err(e) => {
                debug!(product_id = product.id, error = %e, "Dropped review");
                false
            }
        });
        report.reviews_dropped += before - product.reviews.len();

        products.push(product);
    }

    report.accepted = products.len();
    (products, report)
}

/// Records `id` as seen, failing if it already was.
fn check_unique(seen: &mut HashSet<i64>, id: i64) -> ValidationResult<()> {
    if seen.insert(id) {
        Ok(())
    } else {
        Err(ValidationError::Duplicate {
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
