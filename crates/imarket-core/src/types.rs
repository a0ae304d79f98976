//! # Domain Types
//!
//! Core domain types used throughout iMarket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductFeed    │   │    Product      │   │     Review      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  products[] ────┼──►│  id (integer)   │   │  rating (1-5)   │       │
//! │  │  total          │   │  sku, title     │   │  comment        │       │
//! │  │  skip, limit    │   │  price (Money)  │──►│  date           │       │
//! │  └─────────────────┘   │  discount %     │   │  reviewerName   │       │
//! │                        │  favorite ◄─────┼── client-only flag │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   913 bps = 9.13%                                  │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Products arrive as camelCase JSON from the catalog feed. Everything except
//! `id`, `title`, `category` and `price` is optional on decode, so a sparse
//! record still loads. `favorite` is never read from or written to the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 913 bps = 9.13% (Cupertino sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (913 bps → 0.0913).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (913 bps → 9.13).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review attached to a product. Immutable once decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating, 1 to 5.
    pub rating: i32,

    /// Free-text review body.
    #[serde(default)]
    pub comment: String,

    /// ISO-8601 timestamp string, e.g. `2024-05-23T08:56:21.618Z`.
    #[serde(default)]
    pub date: String,

    /// Display name of the reviewer.
    #[serde(default)]
    pub reviewer_name: String,
}

// =============================================================================
// Product
// =============================================================================

/// Physical dimensions of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Feed bookkeeping attached to each product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub barcode: Option<String>,
    pub qr_code: Option<String>,
}

/// A product in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the feed.
    pub id: i64,

    /// Display name.
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Category slug, e.g. `beauty` or `groceries`.
    pub category: String,

    /// Unit price in dollars.
    pub price: Money,

    /// Percentage off the unit price, 0 to 100. Absent means no discount.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub discount_percentage: Option<Decimal>,

    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,

    /// Units on hand.
    #[serde(default)]
    pub stock: i64,

    #[serde(default)]
    pub tags: Vec<String>,

    pub brand: Option<String>,

    /// Stock Keeping Unit - business identifier.
    #[serde(default)]
    pub sku: String,

    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub warranty_information: Option<String>,
    pub shipping_information: Option<String>,
    pub availability_status: Option<String>,

    #[serde(default)]
    pub reviews: Vec<Review>,

    pub return_policy: Option<String>,
    pub minimum_order_quantity: Option<i64>,
    pub meta: Option<ProductMeta>,
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Client-side favorite flag. Never part of the feed.
    #[serde(skip)]
    pub favorite: bool,
}

impl Product {
    /// Returns the discount percentage clamped into `[0, 100]`, or zero
    /// when the feed sent none.
    pub fn effective_discount(&self) -> Decimal {
        self.discount_percentage
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Checks whether the product shows a sale price.
    pub fn has_discount(&self) -> bool {
        self.effective_discount() > Decimal::ZERO
    }

    /// Checks whether any units are on hand.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks whether the product matches a lowercase search needle in its
    /// title, category, brand or any tag.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self
                .brand
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

// =============================================================================
// Product Feed
// =============================================================================

/// The catalog endpoint's response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductFeed {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_JSON: &str = r#"{
        "products": [{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "sku": "RCH45Q1A",
            "weight": 2,
            "dimensions": {"width": 23.17, "height": 14.43, "depth": 28.01},
            "warrantyInformation": "1 month warranty",
            "shippingInformation": "Ships in 1 month",
            "availabilityStatus": "Low Stock",
            "reviews": [{
                "rating": 2,
                "comment": "Very unhappy with my purchase!",
                "date": "2024-05-23T08:56:21.618Z",
                "reviewerName": "John Doe",
                "reviewerEmail": "john.doe@x.dummyjson.com"
            }],
            "returnPolicy": "30 days return policy",
            "minimumOrderQuantity": 24,
            "meta": {
                "createdAt": "2024-05-23T08:56:21.618Z",
                "updatedAt": "2024-05-23T08:56:21.618Z",
                "barcode": "9164035109868",
                "qrCode": "https://assets.dummyjson.com/public/qr-code.png"
            },
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/1/thumbnail.png",
            "images": ["https://cdn.dummyjson.com/products/images/beauty/1/1.png"]
        }],
        "total": 194,
        "skip": 0,
        "limit": 30
    }"#;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(913);
        assert_eq!(rate.bps(), 913);
        assert_eq!(rate.fraction(), Decimal::new(913, 4));
        assert_eq!(rate.percentage(), Decimal::new(913, 2));
    }

    #[test]
    fn test_decode_full_feed() {
        let feed: ProductFeed = serde_json::from_str(FEED_JSON).unwrap();
        assert_eq!(feed.total, 194);
        assert_eq!(feed.limit, 30);

        let product = &feed.products[0];
        assert_eq!(product.id, 1);
        assert_eq!(product.price, Money::from_cents(999));
        assert_eq!(product.discount_percentage, Some(Decimal::new(717, 2)));
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.reviews[0].reviewer_name, "John Doe");
        assert_eq!(product.minimum_order_quantity, Some(24));
        assert!(!product.favorite);
    }

    #[test]
    fn test_decode_sparse_product() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "title": "Apple", "category": "groceries", "price": 1.99}"#)
                .unwrap();
        assert_eq!(product.discount_percentage, None);
        assert!(product.tags.is_empty());
        assert!(product.brand.is_none());
        assert!(!product.has_discount());
    }

    #[test]
    fn test_favorite_never_on_the_wire() {
        let product = Product {
            id: 1,
            favorite: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("favorite").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert!(!back.favorite);
    }

    #[test]
    fn test_effective_discount_clamps() {
        let mut product = Product::default();
        assert_eq!(product.effective_discount(), Decimal::ZERO);

        product.discount_percentage = Some(Decimal::from(150));
        assert_eq!(product.effective_discount(), Decimal::ONE_HUNDRED);

        product.discount_percentage = Some(Decimal::from(-5));
        assert_eq!(product.effective_discount(), Decimal::ZERO);
        assert!(!product.has_discount());
    }
}
