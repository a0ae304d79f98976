//! # Cart
//!
//! The shopping cart: an ordered list of product snapshots with quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Cart Method            Change                 │
//! │  ───────────              ───────────            ──────                 │
//! │                                                                         │
//! │  Add to Cart (new) ──────► add() ──────────────► lines.push(line)      │
//! │                                                                         │
//! │  Add to Cart (same price) ► add() ─────────────► line.quantity += 1    │
//! │                                                                         │
//! │  Remove one ─────────────► remove_one() ───────► line.quantity -= 1    │
//! │                                                   (line gone at 0)      │
//! │                                                                         │
//! │  Remove line ────────────► remove_line() ──────► lines.remove(i)       │
//! │                                                                         │
//! │  Clear ──────────────────► clear() ────────────► lines.clear()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! A line freezes the product's price and discount when it is first added.
//! Adding the product again after a catalog reload changed its price opens
//! a new line at the new price instead of repricing the old units. The
//! catalog stays the source of truth for the product itself; toggling a
//! favorite afterwards never touches the cart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Fulfillment
// =============================================================================

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Fulfillment {
    /// Customer collects from the store.
    #[default]
    Pickup,
    /// Store delivers to the customer.
    Delivery,
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart, with the quantity added.
///
/// ## Design Notes
/// - `product_id`: Reference back to the catalog entry
/// - The remaining fields are a frozen copy taken at add time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: i64,

    /// Title at time of adding (frozen)
    pub title: String,

    /// SKU at time of adding (frozen)
    pub sku: String,

    pub thumbnail: Option<String>,

    /// Unit price at time of adding (frozen)
    pub unit_price: Money,

    /// Discount percentage at time of adding (frozen)
    #[ts(as = "Option<String>")]
    pub discount_percentage: Option<Decimal>,

    /// Units of this product in the cart
    pub quantity: i64,

    /// When this line was first added
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            title: product.title.clone(),
            sku: product.sku.clone(),
            thumbnail: product.thumbnail.clone(),
            unit_price: product.price,
            discount_percentage: product.discount_percentage,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// True when this line was priced the way `product` is priced now.
    pub fn matches_price_of(&self, product: &Product) -> bool {
        self.product_id == product.id
            && self.unit_price == product.price
            && self.discount_percentage == product.discount_percentage
    }

    /// Discount percentage clamped into `[0, 100]`.
    pub fn effective_discount(&self) -> Decimal {
        self.discount_percentage
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `(product_id, unit_price, discount_percentage)`;
///   adding at an unchanged price raises the quantity
/// - A product re-added after its price changed gets a second line, so
///   each unit is charged what it cost when it was added
/// - Every line has quantity >= 1, with no upper limit
/// - Line order is the order snapshots were first added
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    pub fulfillment: Fulfillment,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            fulfillment: Fulfillment::default(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product.
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        self.add_quantity(product, 1)
    }

    /// Adds `quantity` units of a product.
    ///
    /// ## Behavior
    /// - Same product at the same price already in cart: increases that
    ///   line's quantity
    /// - Otherwise: appends a new line with a fresh snapshot
    pub fn add_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches_price_of(product)) {
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Removes one unit of a product, taken from its most recently added
    /// line. The line disappears when its quantity reaches zero; other
    /// lines are untouched.
    pub fn remove_one(&mut self, product_id: i64) -> CoreResult<()> {
        let idx = self
            .lines
            .iter()
            .rposition(|l| l.product_id == product_id)
            .ok_or(CoreError::NotInCart(product_id))?;

        if self.lines[idx].quantity > 1 {
            self.lines[idx].quantity -= 1;
        } else {
            self.lines.remove(idx);
        }
        Ok(())
    }

    /// Removes every line of a product regardless of quantity.
    pub fn remove_line(&mut self, product_id: i64) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == initial_len {
            Err(CoreError::NotInCart(product_id))
        } else {
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// First line of a product.
    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Units of a product across all of its lines.
    pub fn quantity_of(&self, product_id: i64) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .sum()
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of units, counting repeats individually.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            category: "groceries".to_string(),
            sku: format!("SKU-{}", id),
            price: Money::from_cents(cents),
            ..Default::default()
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 999)).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(999));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add(&product).unwrap();
        cart.add(&product).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&test_product(3, 100)).unwrap();
        cart.add(&test_product(1, 100)).unwrap();
        cart.add(&test_product(3, 100)).unwrap();

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_remove_one_leaves_other_units() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);
        cart.add_quantity(&product, 2).unwrap();
        cart.add(&test_product(2, 500)).unwrap();

        cart.remove_one(1).unwrap();
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.item_count(), 2);

        cart.remove_one(1).unwrap();
        assert!(cart.line(1).is_none());
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_missing_product() {
        let mut cart = Cart::new();
        assert!(matches!(cart.remove_one(9), Err(CoreError::NotInCart(9))));
        assert!(matches!(cart.remove_line(9), Err(CoreError::NotInCart(9))));
    }

    #[test]
    fn test_snapshot_is_independent_of_catalog() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 999);
        cart.add(&product).unwrap();

        product.favorite = true;
        product.price = Money::from_cents(1);

        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(999));
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 100);

        assert!(matches!(
            cart.add_quantity(&product, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(cart.add_quantity(&product, -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_every_add_is_counted() {
        let mut cart = Cart::new();
        let product = test_product(1, 100);
        for _ in 0..1000 {
            cart.add(&product).unwrap();
        }
        assert_eq!(cart.item_count(), 1000);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_no_limit_on_distinct_products() {
        let mut cart = Cart::new();
        for id in 0..101 {
            cart.add(&test_product(id, 100)).unwrap();
        }
        assert_eq!(cart.line_count(), 101);
        assert_eq!(cart.item_count(), 101);
    }

    #[test]
    fn test_readd_after_price_change_gets_new_line() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 1000);
        cart.add(&product).unwrap();

        product.price = Money::from_cents(1200);
        cart.add(&product).unwrap();
        cart.add(&product).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(1000));
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[1].unit_price, Money::from_cents(1200));
        assert_eq!(cart.lines()[1].quantity, 2);
        assert_eq!(cart.quantity_of(1), 3);

        product.discount_percentage = Some(Decimal::from(10));
        cart.add(&product).unwrap();
        assert_eq!(cart.line_count(), 3);

        // Newest snapshot goes first.
        cart.remove_one(1).unwrap();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.quantity_of(1), 3);

        cart.remove_line(1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 999)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
