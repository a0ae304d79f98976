//! # Catalog Errors
//!
//! Error types for fetching the product feed.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Types                                │
//! │                                                                         │
//! │  Configuration                                                          │
//! │  └── InvalidEndpoint   - URL doesn't parse or isn't http(s)             │
//! │                                                                         │
//! │  Transport                                                              │
//! │  ├── Http              - connect, TLS, timeout, body read              │
//! │  └── Status            - server answered with a non-2xx code           │
//! │                                                                         │
//! │  Payload                                                                │
//! │  └── Decode            - body isn't a valid product feed               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are retried. The app logs the error and carries on with an
//! empty catalog.

use thiserror::Error;

/// Errors that can occur while fetching the product feed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured endpoint is not a usable URL.
    #[error("Invalid catalog endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Catalog returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body could not be decoded as a product feed.
    #[error("Failed to decode product feed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Checks if this error came from the network rather than the payload.
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Http(_) | CatalogError::Status { .. })
    }
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
