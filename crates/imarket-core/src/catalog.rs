//! # Catalog
//!
//! The in-memory product list and the operations a browser runs on it:
//! lookup, favorites, and search.
//!
//! ## Search Rules
//! - Case-insensitive substring match on title, category, brand or any tag
//! - Empty term returns every product
//! - Matches keep catalog order; there is no relevance ranking

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

// =============================================================================
// Filtering
// =============================================================================

/// Returns the products matching `term`, in their original order.
///
/// ## Example
/// ```rust
/// use imarket_core::catalog::filter_products;
/// use imarket_core::types::Product;
///
/// let products = vec![
///     Product { id: 1, title: "Red Lipstick".into(), category: "beauty".into(), ..Default::default() },
///     Product { id: 2, title: "Apple".into(), category: "groceries".into(), ..Default::default() },
/// ];
///
/// assert_eq!(filter_products(&products, "").len(), 2);
/// assert_eq!(filter_products(&products, "BEAUTY")[0].id, 1);
/// ```
pub fn filter_products<'a>(all: &'a [Product], term: &str) -> Vec<&'a Product> {
    if term.is_empty() {
        return all.iter().collect();
    }

    let needle = term.to_lowercase();
    all.iter().filter(|p| p.matches(&needle)).collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// The product list for the session. Single source of truth for product
/// state, including favorites.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Replaces the product list.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: i64) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: i64) -> CoreResult<bool> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;
        product.favorite = !product.favorite;
        Ok(product.favorite)
    }

    /// Favorited products in catalog order.
    pub fn favorites(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.favorite).collect()
    }

    pub fn filtered(&self, term: &str) -> Vec<&Product> {
        filter_products(&self.products, term)
    }
}

// =============================================================================
// Search Summary
// =============================================================================

/// What a results header shows for the current search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    pub term: String,
    pub count: usize,
    /// `"12 results for \"phone\""`; `None` when not searching.
    pub banner: Option<String>,
}

impl SearchSummary {
    pub fn new(term: &str, count: usize) -> Self {
        let banner = if term.is_empty() {
            None
        } else {
            Some(format!("{} results for \"{}\"", count, term))
        };
        SearchSummary {
            term: term.to_string(),
            count,
            banner,
        }
    }

    /// No results: the renderer shows "No Results".
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, category: &str, brand: Option<&str>, tags: &[&str]) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            brand: brand.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Essence Mascara", "beauty", Some("Essence"), &["beauty", "mascara"]),
            product(2, "Apple", "groceries", None, &["fruits"]),
            product(3, "Wooden Bed", "furniture", Some("Annibale Colombo"), &["furniture", "beds"]),
            product(4, "Green Chili Pepper", "groceries", None, &["vegetables"]),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_term_returns_all_in_order() {
        let all = sample();
        assert_eq!(ids(&filter_products(&all, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_matches_each_field_case_insensitively() {
        let all = sample();
        assert_eq!(ids(&filter_products(&all, "APPLE")), vec![2]);
        assert_eq!(ids(&filter_products(&all, "Groceries")), vec![2, 4]);
        assert_eq!(ids(&filter_products(&all, "colombo")), vec![3]);
        assert_eq!(ids(&filter_products(&all, "vegeta")), vec![4]);
    }

    #[test]
    fn test_no_match() {
        let all = sample();
        assert!(filter_products(&all, "laptop").is_empty());
    }

    #[test]
    fn test_whitespace_term_is_a_literal_needle() {
        let all = sample();
        assert_eq!(ids(&filter_products(&all, " ")), vec![1, 3, 4]);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut catalog = Catalog::new(sample());
        assert!(catalog.favorites().is_empty());

        assert!(catalog.toggle_favorite(3).unwrap());
        assert!(catalog.toggle_favorite(1).unwrap());
        assert_eq!(ids(&catalog.favorites()), vec![1, 3]);

        assert!(!catalog.toggle_favorite(3).unwrap());
        assert_eq!(ids(&catalog.favorites()), vec![1]);
    }

    #[test]
    fn test_unknown_product() {
        let mut catalog = Catalog::new(sample());
        assert!(matches!(catalog.get(99), Err(CoreError::ProductNotFound(99))));
        assert!(catalog.toggle_favorite(99).is_err());
    }

    #[test]
    fn test_search_summary() {
        let summary = SearchSummary::new("phone", 12);
        assert_eq!(summary.banner.as_deref(), Some("12 results for \"phone\""));
        assert!(!summary.is_empty());

        let idle = SearchSummary::new("", 4);
        assert!(idle.banner.is_none());

        assert!(SearchSummary::new("laptop", 0).is_empty());
    }
}
