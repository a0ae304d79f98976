//! # iMarket Library
//!
//! Application layer for the iMarket shopping catalog: session state plus
//! the named commands a renderer invokes.
//!
//! ## Module Organization
//! ```text
//! imarket/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState and state type exports
//! │   ├── catalog.rs  ◄─── Product list + search term
//! │   ├── cart.rs     ◄─── Cart state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── load_catalog
//! │   ├── product.rs  ◄─── Listing, lookup, search
//! │   ├── favorites.rs◄─── Favorite toggling
//! │   ├── cart.rs     ◄─── Cart manipulation, checkout
//! │   ├── review.rs   ◄─── Sorted reviews
//! │   └── config.rs   ◄─── get_config
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Renderer ──► command(&state, args) ──► Result<Dto, ApiError>          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │              lock ─► imarket-core (pure) ─► unlock                      │
//! │                                                                         │
//! │   State changes only inside commands. Everything derived (totals,      │
//! │   search results, review order) is recomputed on read.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::catalog::load_catalog;
use commands::product::search_summary;
use state::{AppState, ConfigState};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, imarket crates at DEBUG; RUST_LOG overrides        │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: empty product list, no search term                  │
/// │     • CartState: empty cart, pick up                                    │
/// │     • ConfigState: compiled-in defaults                                 │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • One GET of the product feed                                       │
/// │     • Failure is logged; the app continues with no products             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() {
    init_tracing();

    info!("Starting iMarket");

    let app = AppState::new(ConfigState::default());
    start(&app).await;
}

/// Loads the catalog into fresh state and logs what the user would see.
pub async fn start(app: &AppState) {
    if load_catalog(&app.catalog, &app.config).await.is_err() {
        warn!("Continuing with an empty catalog");
    }

    let summary = search_summary(&app.catalog);
    let favorites = app.catalog.with_catalog(|c| c.favorites().len());
    info!(
        products = summary.count,
        favorites,
        location = %app.config.store_location,
        "iMarket ready"
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=imarket_catalog=trace` - Trace the feed client only
/// - Default: INFO, DEBUG for the imarket crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,imarket=debug,imarket_core=debug,imarket_catalog=debug")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_start_survives_unreachable_feed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = AppState::new(
            ConfigState::default().with_catalog_url(format!("http://{}/products", addr)),
        );
        start(&app).await;

        assert!(app.catalog.with_catalog(|c| c.is_empty()));
        assert!(commands::product::list_products(&app.catalog).is_empty());
    }
}
