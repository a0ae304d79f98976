//! # imarket-core: Pure Business Logic for iMarket
//!
//! This crate is the **heart** of iMarket. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        iMarket Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Renderer (external)                          │   │
//! │  │    Products ──► Product Page ──► Favorites ──► Cart            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    App Commands (apps/imarket)                  │   │
//! │  │    add_to_cart, toggle_favorite, set_search_term, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ imarket-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │ pricing │ │  cart   │ │ catalog │  │   │
//! │  │   │ Product │ │  Money  │ │subtotal │ │CartLine │ │ search  │  │   │
//! │  │   │ Review  │ │ TaxRate │ │  tax    │ │  Cart   │ │favorites│  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              imarket-catalog (Product Feed)                     │   │
//! │  │              GET /products, decode, validate                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Review, ProductFeed, TaxRate)
//! - [`money`] - Money type over exact decimals
//! - [`pricing`] - Subtotal, discount, tax and grand total
//! - [`cart`] - Cart lines and quantities
//! - [`catalog`] - Product list, favorites, search
//! - [`reviews`] - Review ordering and rating display
//! - [`display`] - Labels shown beside products and the cart
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use imarket_core::{pricing, Cart, Money, Product};
//! use rust_decimal::Decimal;
//!
//! let product = Product {
//!     id: 1,
//!     title: "Desk Lamp".into(),
//!     category: "home-decoration".into(),
//!     price: Money::from_cents(10000),           // $100.00
//!     discount_percentage: Some(Decimal::from(20)),
//!     ..Default::default()
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&product).unwrap();
//!
//! // $80.00 + 9.13% tax = $87.304, shown as $87.30
//! assert_eq!(pricing::grand_total(&cart).to_string(), "$87.30");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod display;
pub mod error;
pub mod money;
pub mod pricing;
pub mod reviews;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, Fulfillment};
pub use catalog::{Catalog, SearchSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PriceBreakdown;
pub use reviews::ReviewSort;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Regional sales tax in basis points (Cupertino, 9.13%).
pub const TAX_RATE_BPS: u32 = 913;

/// Regional sales tax applied to every cart.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(TAX_RATE_BPS);

/// Where orders are picked up from or delivered to.
pub const STORE_LOCATION: &str = "Cupertino";
