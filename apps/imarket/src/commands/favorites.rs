//! # Favorite Commands
//!
//! The heart button. The flag lives on the catalog's own product record, so
//! the product list, the product page and the favorites tab always agree.

use tracing::debug;

use super::product::ProductDto;
use crate::error::ApiError;
use crate::state::CatalogState;

/// Flips a product's favorite flag and returns the updated product.
pub fn toggle_favorite(catalog: &CatalogState, product_id: i64) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, "toggle_favorite command");

    let product = catalog.with_catalog_mut(|c| {
        c.toggle_favorite(product_id)?;
        c.get(product_id).map(ProductDto::from)
    })?;
    Ok(product)
}

/// Favorited products in catalog order.
pub fn list_favorites(catalog: &CatalogState) -> Vec<ProductDto> {
    debug!("list_favorites command");

    catalog.with_catalog(|c| c.favorites().into_iter().map(ProductDto::from).collect())
}
