//! # Commands Module
//!
//! Every operation a renderer may invoke. Mutations happen only here.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── catalog.rs    ◄─── load_catalog
//! ├── product.rs    ◄─── list_products, get_product, search
//! ├── favorites.rs  ◄─── toggle_favorite, list_favorites
//! ├── cart.rs       ◄─── cart manipulation, checkout
//! ├── review.rs     ◄─── get_reviews
//! └── config.rs     ◄─── get_config
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &CatalogState) -> Vec<ProductDto>
//!
//! // Only needs the cart and config
//! fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse
//!
//! // Needs both catalog and cart
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, config: &ConfigState, ...)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod product;
pub mod review;
