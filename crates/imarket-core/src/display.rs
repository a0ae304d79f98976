//! # Display Helpers
//!
//! Strings and flags a renderer shows next to products and the cart.
//! No layout lives here, only the text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Fulfillment;
use crate::pricing::line_discounted_price;
use crate::types::Product;

/// Stock availability line, e.g. `"In Stock (5)"`.
pub fn stock_label(stock: i64) -> String {
    if stock <= 0 {
        "Out of Stock".to_string()
    } else {
        format!("In Stock ({})", stock)
    }
}

/// Upper-cases the first character, leaving the rest as-is.
///
/// ```rust
/// use imarket_core::display::capitalize;
///
/// assert_eq!(capitalize("home-decoration"), "Home-decoration");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pick up / delivery line for the cart header.
pub fn fulfillment_label(fulfillment: Fulfillment, location: &str) -> String {
    match fulfillment {
        Fulfillment::Pickup => format!("Pick up from {}", location),
        Fulfillment::Delivery => format!("Delivery to {}", location),
    }
}

/// Cart tab badge: hidden when the cart is empty.
pub fn cart_badge(item_count: i64) -> Option<String> {
    (item_count > 0).then(|| item_count.to_string())
}

/// The price pair shown on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceTag {
    /// List price; struck through when `sale` is present.
    pub original: String,
    /// Discounted price, only when a discount applies.
    pub sale: Option<String>,
}

impl PriceTag {
    pub fn for_product(product: &Product) -> Self {
        let sale = product
            .has_discount()
            .then(|| line_discounted_price(product).to_string());
        PriceTag {
            original: product.price.to_string(),
            sale,
        }
    }

    /// The price a customer pays per unit.
    pub fn effective(&self) -> &str {
        self.sale.as_deref().unwrap_or(&self.original)
    }
}
