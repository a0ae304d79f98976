//! # Product Commands
//!
//! Product listing, lookup and search.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "lamp"                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search_term("lamp")  ──► term stored in CatalogState               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products()          ──► filter_products(all, term)                │
//! │       │                       title / category / brand / tags,          │
//! │       │                       case-insensitive, catalog order           │
//! │       ▼                                                                 │
//! │  search_summary()         ──► "3 results for \"lamp\""                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use imarket_core::display::{capitalize, stock_label, PriceTag};
use imarket_core::reviews::{star_row, STAR_COUNT};
use imarket_core::validation::validate_search_query;
use imarket_core::{Product, SearchSummary};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Product DTO for the renderer.
///
/// Unlike [`Product`], this carries the favorite flag and the pre-computed
/// labels a product card or product page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    /// e.g. `"Beauty"`
    pub category_label: String,
    pub brand: Option<String>,
    pub sku: String,
    pub tags: Vec<String>,
    pub price: PriceTag,
    pub discount_percentage: Option<String>,
    pub rating: f64,
    pub stars: [f64; STAR_COUNT],
    pub stock: i64,
    pub stock_label: String,
    pub in_stock: bool,
    pub favorite: bool,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub warranty_information: Option<String>,
    pub shipping_information: Option<String>,
    pub return_policy: Option<String>,
    pub review_count: usize,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            category_label: capitalize(&p.category),
            brand: p.brand.clone(),
            sku: p.sku.clone(),
            tags: p.tags.clone(),
            price: PriceTag::for_product(p),
            discount_percentage: p
                .has_discount()
                .then(|| p.effective_discount().normalize().to_string()),
            rating: p.rating,
            stars: star_row(p.rating),
            stock: p.stock,
            stock_label: stock_label(p.stock),
            in_stock: p.in_stock(),
            favorite: p.favorite,
            thumbnail: p.thumbnail.clone(),
            images: p.images.clone(),
            warranty_information: p.warranty_information.clone(),
            shipping_information: p.shipping_information.clone(),
            return_policy: p.return_policy.clone(),
            review_count: p.reviews.len(),
        }
    }
}

/// Lists products matching the current search term, in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<ProductDto> {
    let term = catalog.search_term();
    debug!(term = %term, "list_products command");

    catalog.with_catalog(|c| c.filtered(&term).into_iter().map(ProductDto::from).collect())
}

/// Gets a single product by id.
pub fn get_product(catalog: &CatalogState, product_id: i64) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    let product = catalog.with_catalog(|c| c.get(product_id).map(ProductDto::from))?;
    Ok(product)
}

/// Sets the search term and returns the summary for it.
///
/// Surrounding whitespace is trimmed; an empty term clears the search.
pub fn set_search_term(catalog: &CatalogState, term: &str) -> Result<SearchSummary, ApiError> {
    let term = validate_search_query(term).map_err(|e| ApiError::validation(e.to_string()))?;
    debug!(term = %term, "set_search_term command");

    catalog.set_search_term(term);
    Ok(search_summary(catalog))
}

/// Result count and banner for the current search term.
pub fn search_summary(catalog: &CatalogState) -> SearchSummary {
    let term = catalog.search_term();
    let count = catalog.with_catalog(|c| c.filtered(&term).len());
    SearchSummary::new(&term, count)
}
