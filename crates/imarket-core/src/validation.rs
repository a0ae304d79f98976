//! # Validation Module
//!
//! Input validation utilities for iMarket.
//!
//! ## Validation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Values Are Checked                           │
//! │                                                                         │
//! │  Ingestion (imarket-catalog)                                           │
//! │  ├── validate_product() on every feed record                           │
//! │  └── Invalid record → dropped with a warning, rest of feed kept        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Commands (apps/imarket)                                               │
//! │  ├── validate_search_query() before storing the search term            │
//! │  └── validate_quantity() on cart changes                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pricing (this crate)                                                  │
//! │  └── Discounts clamped to [0, 100] so every function stays total       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use imarket_core::validation::{validate_search_query, validate_quantity};
//!
//! assert_eq!(validate_search_query("  mascara ").unwrap(), "mascara");
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, Review};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest search term accepted.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Highest unit price accepted from the feed, in dollars.
pub const MAX_PRICE_DOLLARS: i64 = 1_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns the whole catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use imarket_core::money::Money;
/// use imarket_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(999)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// assert!(validate_price(Money::from_cents(100_000_000_001)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    // Keeps every cart total inside Decimal's range.
    if price.amount() > Decimal::from(MAX_PRICE_DOLLARS) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
            max: MAX_PRICE_DOLLARS.to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Absent is allowed (no discount)
/// - Otherwise must lie in `[0, 100]`
pub fn validate_discount_percentage(percent: Option<Decimal>) -> ValidationResult<()> {
    match percent {
        Some(p) if p < Decimal::ZERO || p > Decimal::ONE_HUNDRED => {
            Err(ValidationError::OutOfRange {
                field: "discountPercentage".to_string(),
                min: "0".to_string(),
                max: "100".to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Validates a stock level.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a review's star rating (1 to 5).
pub fn validate_review(review: &Review) -> ValidationResult<()> {
    if !(1..=5).contains(&review.rating) {
        return Err(ValidationError::OutOfRange {
            field: "review rating".to_string(),
            min: "1".to_string(),
            max: "5".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is no upper bound: every add counts.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a product record as received from the feed.
///
/// ## Rules
/// - `title` must not be blank
/// - `price` must lie in `[0, MAX_PRICE_DOLLARS]`
/// - `discountPercentage`, when present, must lie in `[0, 100]`
/// - `stock` must be non-negative
///
/// Reviews with out-of-range ratings are not fatal to the product; see
/// [`validate_review`].
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    validate_price(product.price)?;
    validate_discount_percentage(product.discount_percentage)?;
    validate_stock(product.stock)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
