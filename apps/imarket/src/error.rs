//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in iMarket                                │
//! │                                                                         │
//! │  Renderer                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  add_to_cart(42)                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Feed Error? ──── CatalogError::Status { .. } ─────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Domain Error? ─── CoreError::ProductNotFound ─── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! `ApiError` serializes to a machine-readable `code` and a human-readable
//! `message`, so any renderer can branch on the code.

use imarket_catalog::CatalogError;
use imarket_core::CoreError;
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the renderer receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Product feed could not be fetched or decoded
    CatalogUnavailable,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::NotInCart(id) => ApiError::not_found("Cart line", id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts feed errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidEndpoint { .. } => ApiError::internal(err.to_string()),
            CatalogError::Http(e) => {
                // Log the transport detail but return a generic message
                tracing::error!("Catalog request failed: {}", e);
                ApiError::new(ErrorCode::CatalogUnavailable, "Could not reach the catalog")
            }
            CatalogError::Status { status, .. } => ApiError::new(
                ErrorCode::CatalogUnavailable,
                format!("Catalog responded with status {}", status),
            ),
            CatalogError::Decode(e) => {
                tracing::error!("Catalog payload rejected: {}", e);
                ApiError::new(ErrorCode::CatalogUnavailable, "Catalog data was malformed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use imarket_core::ValidationError;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::not_found("Product", 42);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::NotInCart(7).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::ProductNotFound(404).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 404");

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_from_catalog_error() {
        let err: ApiError = CatalogError::Status {
            status: 500,
            url: "https://dummyjson.com/products".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert_eq!(err.message, "Catalog responded with status 500");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("quantity must be positive");
        assert_eq!(err.to_string(), "[ValidationError] quantity must be positive");
    }
}
