//! # Cart Commands
//!
//! Commands for cart manipulation and the checkout button.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │ (logs, cart unchanged) │
//! │  │  Cart    │     │          │     │          │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   remove_one_from_cart                                  │
//! │                   remove_from_cart                                      │
//! │                   set_fulfillment                                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use imarket_core::display::{cart_badge, fulfillment_label};
use imarket_core::pricing::{breakdown, line_discounted_price};
use imarket_core::{Cart, CartLine, Fulfillment, PriceBreakdown};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// One cart row as the renderer shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: i64,
    pub title: String,
    pub sku: String,
    pub thumbnail: Option<String>,
    pub quantity: i64,
    /// List price per unit.
    pub unit_price: String,
    /// Discounted price per unit.
    pub sale_price: String,
    /// Discounted price times quantity.
    pub line_total: String,
}

impl From<&CartLine> for CartLineDto {
    fn from(line: &CartLine) -> Self {
        let sale = line_discounted_price(line);
        CartLineDto {
            product_id: line.product_id,
            title: line.title.clone(),
            sku: line.sku.clone(),
            thumbnail: line.thumbnail.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            sale_price: sale.to_string(),
            line_total: sale.multiply_quantity(line.quantity).to_string(),
        }
    }
}

/// Cart response including lines, totals and header labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineDto>,
    pub totals: PriceBreakdown,
    pub fulfillment: Fulfillment,
    /// e.g. `"Pick up from Cupertino"`
    pub fulfillment_label: String,
    /// Tab badge; absent for an empty cart.
    pub badge: Option<String>,
}

impl CartResponse {
    pub fn new(cart: &Cart, location: &str) -> Self {
        let totals = breakdown(cart);
        CartResponse {
            lines: cart.lines().iter().map(CartLineDto::from).collect(),
            badge: cart_badge(totals.item_count),
            totals,
            fulfillment: cart.fulfillment,
            fulfillment_label: fulfillment_label(cart.fulfillment, location),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Cart Screen
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Pick up from Cupertino                                                 │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Desk Lamp               x1    $100.00  $80.00               │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal (1 Items)                      $80.00               │    │
/// │  │  Savings                                 $20.00               │    │
/// │  │  Taxes                                    $7.30               │    │
/// │  │  ──────────────────────────────────────────────────          │    │
/// │  │  Total                                   $87.30               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, &config.store_location))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as a new line
/// - Price and discount are frozen at time of adding
///
/// ## Arguments
/// * `product_id` - Catalog id of the product
/// * `quantity` - Units to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    product_id: i64,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = catalog.with_catalog(|c| c.get(product_id).cloned())?;

    let response = cart.with_cart_mut(|c| {
        c.add_quantity(&product, quantity)?;
        Ok::<_, ApiError>(CartResponse::new(c, &config.store_location))
    })?;
    Ok(response)
}

/// Removes one unit of a product; the line goes when its quantity hits 0.
pub fn remove_one_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_one_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_one(product_id)?;
        Ok::<_, ApiError>(CartResponse::new(c, &config.store_location))
    })
}

/// Removes a product's whole line.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_line(product_id)?;
        Ok::<_, ApiError>(CartResponse::new(c, &config.store_location))
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::new(c, &config.store_location)
    })
}

/// Switches between pick up and delivery.
pub fn set_fulfillment(
    cart: &CartState,
    config: &ConfigState,
    fulfillment: Fulfillment,
) -> CartResponse {
    debug!(?fulfillment, "set_fulfillment command");

    cart.with_cart_mut(|c| {
        c.fulfillment = fulfillment;
        CartResponse::new(c, &config.store_location)
    })
}

/// The checkout button. No order is placed: the cart is left as it is and
/// its totals are logged and returned.
pub fn checkout(cart: &CartState) -> PriceBreakdown {
    let totals = cart.with_cart(breakdown);
    info!(
        items = totals.item_count,
        total = %totals.grand_total,
        "checkout command"
    );
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::error::ErrorCode;
    use crate::state::AppState;
    use imarket_core::Money;

    fn app() -> AppState {
        AppState {
            catalog: fixtures::catalog(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_cart() {
        let app = app();
        let cart = get_cart(&app.cart, &app.config);

        assert!(cart.lines.is_empty());
        assert_eq!(cart.badge, None);
        assert_eq!(cart.totals.display.total, "$0.00");
        assert_eq!(cart.fulfillment_label, "Pick up from Cupertino");
    }

    #[test]
    fn test_add_discounted_product() {
        let app = app();
        let cart = add_to_cart(&app.catalog, &app.cart, &app.config, 1, None).unwrap();

        assert_eq!(cart.badge.as_deref(), Some("1"));
        assert_eq!(cart.lines[0].unit_price, "$100.00");
        assert_eq!(cart.lines[0].sale_price, "$80.00");
        assert_eq!(cart.totals.display.subtotal, "$80.00");
        assert_eq!(cart.totals.display.savings, "$20.00");
        assert_eq!(cart.totals.display.taxes, "$7.30");
        assert_eq!(cart.totals.display.total, "$87.30");
    }

    #[test]
    fn test_adding_twice_doubles_totals() {
        let app = app();
        add_to_cart(&app.catalog, &app.cart, &app.config, 1, None).unwrap();
        let cart = add_to_cart(&app.catalog, &app.cart, &app.config, 1, None).unwrap();

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].line_total, "$160.00");
        assert_eq!(cart.totals.display.items, "2 Items");
        assert_eq!(cart.totals.display.total, "$174.61");
    }

    #[test]
    fn test_add_unknown_product() {
        let app = app();
        let err = add_to_cart(&app.catalog, &app.cart, &app.config, 77, None).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&app.cart, &app.config).lines.is_empty());
    }

    #[test]
    fn test_add_invalid_quantity() {
        let app = app();
        let err = add_to_cart(&app.catalog, &app.cart, &app.config, 2, Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cart_keeps_frozen_price_after_reload() {
        let app = app();
        add_to_cart(&app.catalog, &app.cart, &app.config, 2, None).unwrap();
        app.catalog.with_catalog_mut(|c| c.replace(Vec::new()));

        let cart = get_cart(&app.cart, &app.config);
        assert_eq!(cart.lines[0].title, "Apple");
        assert_eq!(cart.totals.display.subtotal, "$1.99");
    }

    #[test]
    fn test_readd_after_reprice_charges_each_unit_its_own_price() {
        let app = app();
        add_to_cart(&app.catalog, &app.cart, &app.config, 2, None).unwrap();

        let mut products = fixtures::products();
        for p in &mut products {
            if p.id == 2 {
                p.price = Money::from_cents(249);
            }
        }
        app.catalog.with_catalog_mut(|c| c.replace(products));

        let cart = add_to_cart(&app.catalog, &app.cart, &app.config, 2, None).unwrap();
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].unit_price, "$1.99");
        assert_eq!(cart.lines[1].unit_price, "$2.49");
        assert_eq!(cart.totals.display.items, "2 Items");
        assert_eq!(cart.totals.display.subtotal, "$4.48");
    }

    #[test]
    fn test_remove_one_then_line() {
        let app = app();
        add_to_cart(&app.catalog, &app.cart, &app.config, 2, Some(3)).unwrap();
        add_to_cart(&app.catalog, &app.cart, &app.config, 1, None).unwrap();

        let cart = remove_one_from_cart(&app.cart, &app.config, 2).unwrap();
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.totals.item_count, 3);

        let cart = remove_from_cart(&app.cart, &app.config, 2).unwrap();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].product_id, 1);

        let err = remove_one_from_cart(&app.cart, &app.config, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_cart() {
        let app = app();
        add_to_cart(&app.catalog, &app.cart, &app.config, 3, Some(2)).unwrap();

        let cart = clear_cart(&app.cart, &app.config);
        assert!(cart.lines.is_empty());
        assert!(cart.totals.grand_total.is_zero());
    }

    #[test]
    fn test_set_fulfillment() {
        let app = app();
        let cart = set_fulfillment(&app.cart, &app.config, Fulfillment::Delivery);

        assert_eq!(cart.fulfillment, Fulfillment::Delivery);
        assert_eq!(cart.fulfillment_label, "Delivery to Cupertino");
    }

    #[test]
    fn test_checkout_leaves_cart_unchanged() {
        let app = app();
        add_to_cart(&app.catalog, &app.cart, &app.config, 1, None).unwrap();

        let totals = checkout(&app.cart);
        assert_eq!(totals.display.total, "$87.30");
        assert_eq!(get_cart(&app.cart, &app.config).totals, totals);
    }
}
