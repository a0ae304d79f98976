//! # Pricing Engine
//!
//! Money totals for a cart under the fixed regional tax rate.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Per unit:                                                              │
//! │    discount amount  = price × (pct / 100)       (0 when pct is 0/absent)│
//! │    discounted price = price × (1 − pct / 100)   (price when pct is 0)   │
//! │                                                                         │
//! │  Per cart (each line counts `quantity` times):                         │
//! │    subtotal       = Σ discounted price          ◄── already net        │
//! │    total discount = Σ discount amount                                   │
//! │    tax            = 9.13% × subtotal                                    │
//! │    grand total    = subtotal + tax                                      │
//! │                                                                         │
//! │  Reconciliation: subtotal + total discount = Σ price                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function is pure and total: discounts are clamped and [`Money`]
//! arithmetic saturates rather than overflowing. Nothing is cached; totals are
//! recomputed on every read. Amounts keep full precision; only
//! [`PriceBreakdown`]'s display strings are rounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLine};
use crate::money::Money;
use crate::types::{Product, TaxRate};
use crate::TAX_RATE;

// =============================================================================
// Priceable
// =============================================================================

/// Anything carrying a unit price and an optional percentage discount.
pub trait Priceable {
    fn unit_price(&self) -> Money;

    /// Discount percentage in `[0, 100]`; zero means none.
    fn discount_percentage(&self) -> Decimal;
}

impl Priceable for Product {
    fn unit_price(&self) -> Money {
        self.price
    }

    fn discount_percentage(&self) -> Decimal {
        self.effective_discount()
    }
}

impl Priceable for CartLine {
    fn unit_price(&self) -> Money {
        self.unit_price
    }

    fn discount_percentage(&self) -> Decimal {
        self.effective_discount()
    }
}

// =============================================================================
// Line Pricing
// =============================================================================

/// Currency saved on one unit by its discount.
pub fn line_discount_amount<P: Priceable + ?Sized>(item: &P) -> Money {
    let pct = item.discount_percentage();
    if pct > Decimal::ZERO {
        item.unit_price().percentage_of(pct)
    } else {
        Money::zero()
    }
}

/// Price of one unit after its discount.
pub fn line_discounted_price<P: Priceable + ?Sized>(item: &P) -> Money {
    let pct = item.discount_percentage();
    if pct > Decimal::ZERO {
        item.unit_price().apply_percentage_discount(pct)
    } else {
        item.unit_price()
    }
}

// =============================================================================
// Cart Pricing
// =============================================================================

/// Sum of discounted prices across every unit in the cart.
pub fn subtotal(cart: &Cart) -> Money {
    cart.lines()
        .iter()
        .map(|l| line_discounted_price(l) * l.quantity)
        .sum()
}

/// Sum of discount amounts across every unit in the cart.
pub fn total_discount(cart: &Cart) -> Money {
    cart.lines()
        .iter()
        .map(|l| line_discount_amount(l) * l.quantity)
        .sum()
}

/// Tax on the subtotal at [`TAX_RATE`].
pub fn tax(cart: &Cart) -> Money {
    subtotal(cart).calculate_tax(TAX_RATE)
}

/// Subtotal plus tax: the amount presented as due.
pub fn grand_total(cart: &Cart) -> Money {
    subtotal(cart) + tax(cart)
}

/// Number of units in the cart, counting repeats individually.
pub fn item_count(cart: &Cart) -> i64 {
    cart.item_count()
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The derived cart quantities, bundled for a renderer.
///
/// Amounts are exact; the `display` strings are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub item_count: i64,
    pub subtotal: Money,
    pub total_discount: Money,
    pub tax: Money,
    pub grand_total: Money,
    pub tax_rate: TaxRate,
    pub display: BreakdownDisplay,
}

/// Two-decimal strings for each amount, e.g. `"$87.30"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownDisplay {
    pub subtotal: String,
    pub savings: String,
    pub taxes: String,
    pub total: String,
    /// e.g. `"3 Items"`
    pub items: String,
}

/// Computes every derived quantity for the cart.
pub fn breakdown(cart: &Cart) -> PriceBreakdown {
    let subtotal = subtotal(cart);
    let total_discount = total_discount(cart);
    let tax = subtotal.calculate_tax(TAX_RATE);
    let grand_total = subtotal + tax;
    let item_count = item_count(cart);

    PriceBreakdown {
        item_count,
        subtotal,
        total_discount,
        tax,
        grand_total,
        tax_rate: TAX_RATE,
        display: BreakdownDisplay {
            subtotal: subtotal.to_string(),
            savings: total_discount.to_string(),
            taxes: tax.to_string(),
            total: grand_total.to_string(),
            items: format!("{} Items", item_count),
        },
    }
}

impl From<&Cart> for PriceBreakdown {
    fn from(cart: &Cart) -> Self {
        breakdown(cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn money(s: &str) -> Money {
        Money::new(d(s))
    }

    fn product(id: i64, price: &str, discount: Option<&str>) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            category: "groceries".to_string(),
            price: money(price),
            discount_percentage: discount.map(d),
            ..Default::default()
        }
    }

    fn cart_of(products: &[&Product]) -> Cart {
        let mut cart = Cart::new();
        for p in products {
            cart.add(p).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let cart = Cart::new();
        assert!(subtotal(&cart).is_zero());
        assert!(total_discount(&cart).is_zero());
        assert!(tax(&cart).is_zero());
        assert!(grand_total(&cart).is_zero());
        assert_eq!(item_count(&cart), 0);
    }

    #[test]
    fn test_single_item_without_discount() {
        let p = product(1, "100", Some("0"));
        let cart = cart_of(&[&p]);

        assert_eq!(subtotal(&cart), money("100.00"));
        assert_eq!(total_discount(&cart), Money::zero());
        assert_eq!(tax(&cart), money("9.13"));
        assert_eq!(grand_total(&cart), money("109.13"));
        assert_eq!(item_count(&cart), 1);
    }

    #[test]
    fn test_single_item_with_twenty_percent_discount() {
        let p = product(1, "100", Some("20"));
        assert_eq!(line_discounted_price(&p), money("80.00"));
        assert_eq!(line_discount_amount(&p), money("20.00"));

        let cart = cart_of(&[&p]);
        assert_eq!(total_discount(&cart), money("20.00"));
        assert_eq!(subtotal(&cart), money("80.00"));
        assert_eq!(tax(&cart), money("7.304"));
        assert_eq!(tax(&cart).rounded(), money("7.30"));
        assert_eq!(grand_total(&cart), money("87.304"));
        assert_eq!(grand_total(&cart).rounded(), money("87.30"));
    }

    #[test]
    fn test_absent_discount_means_full_price() {
        let p = product(1, "12.50", None);
        assert_eq!(line_discounted_price(&p), money("12.50"));
        assert!(line_discount_amount(&p).is_zero());
    }

    #[test]
    fn test_adding_twice_doubles_everything() {
        let p = product(1, "9.99", Some("7.17"));
        let once = cart_of(&[&p]);
        let twice = cart_of(&[&p, &p]);

        assert_eq!(subtotal(&twice), subtotal(&once) * 2);
        assert_eq!(total_discount(&twice), total_discount(&once) * 2);
        assert_eq!(tax(&twice), tax(&once) * 2);
        assert_eq!(grand_total(&twice), grand_total(&once) * 2);
        assert_eq!(item_count(&twice), item_count(&once) * 2);
    }

    #[test]
    fn test_discount_and_subtotal_reconcile_to_gross() {
        let a = product(1, "9.99", Some("7.17"));
        let b = product(2, "1999.99", Some("17.5"));
        let c = product(3, "0.89", None);
        let e = product(4, "49.99", Some("100"));
        let cart = cart_of(&[&a, &b, &b, &c, &e]);

        let gross: Money = cart
            .lines()
            .iter()
            .map(|l| l.unit_price * l.quantity)
            .sum();
        assert_eq!(total_discount(&cart) + subtotal(&cart), gross);
    }

    #[test]
    fn test_out_of_range_discount_is_clamped() {
        let over = product(1, "10", Some("150"));
        assert_eq!(line_discounted_price(&over), Money::zero());
        assert_eq!(line_discount_amount(&over), money("10"));

        let negative = product(2, "10", Some("-5"));
        assert_eq!(line_discounted_price(&negative), money("10"));
        assert!(line_discount_amount(&negative).is_zero());
    }

    #[test]
    fn test_oversized_price_saturates_instead_of_panicking() {
        let p = product(1, "50000000000000000000000000000", None);
        let cart = cart_of(&[&p, &p]);

        assert_eq!(subtotal(&cart).amount(), Decimal::MAX);
        assert_eq!(grand_total(&cart).amount(), Decimal::MAX);
        assert_eq!(item_count(&cart), 2);
    }

    #[test]
    fn test_cart_line_prices_like_its_product() {
        let p = product(1, "19.99", Some("12.5"));
        let line = CartLine::from_product(&p, 1);
        assert_eq!(line_discounted_price(&line), line_discounted_price(&p));
        assert_eq!(line_discount_amount(&line), line_discount_amount(&p));
    }

    #[test]
    fn test_breakdown_display() {
        let p = product(1, "100", Some("20"));
        let cart = cart_of(&[&p]);
        let b = breakdown(&cart);

        assert_eq!(b.item_count, 1);
        assert_eq!(b.tax_rate.bps(), 913);
        assert_eq!(b.display.subtotal, "$80.00");
        assert_eq!(b.display.savings, "$20.00");
        assert_eq!(b.display.taxes, "$7.30");
        assert_eq!(b.display.total, "$87.30");
        assert_eq!(b.display.items, "1 Items");
        assert_eq!(b.grand_total, grand_total(&cart));
    }
}
