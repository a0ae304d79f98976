//! # imarket-catalog: Product Feed Client
//!
//! Fetches the product catalog from the public feed and hands back
//! validated [`imarket_core::Product`] records.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Load                                    │
//! │                                                                         │
//! │  App startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogClient::fetch_products()                                        │
//! │       │                                                                 │
//! │       ├── GET https://dummyjson.com/products                            │
//! │       │        │                                                        │
//! │       │        ├── transport error ──► CatalogError::Http               │
//! │       │        ├── non-2xx         ──► CatalogError::Status             │
//! │       │        └── bad JSON        ──► CatalogError::Decode             │
//! │       │                                                                 │
//! │       └── ingest()  drops invalid products and reviews                  │
//! │                                                                         │
//! │  On error the app logs it and keeps an empty catalog.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ingest;

pub use client::CatalogClient;
pub use config::{CatalogConfig, CATALOG_URL};
pub use error::{CatalogError, CatalogResult};
pub use ingest::{ingest, IngestReport};
