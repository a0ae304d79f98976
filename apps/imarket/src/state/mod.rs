//! # State Module
//!
//! Manages application state for iMarket.
//!
//! Each command receives only the state it needs, so the three state types
//! stay separate. [`AppState`] bundles them for whoever owns the session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        AppState                                 │   │
//! │  │  AppState::new(ConfigState::default())                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<RwLock< │  │  Arc<Mutex<  │  │  store_location  │              │
//! │  │    Catalog   │  │    Cart      │  │  tax_rate_bps    │              │
//! │  │  >> + term   │  │  >>          │  │  catalog feed    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: many readers, writes only on load and favorite toggle │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;

/// All session state, owned by the host and lent to commands.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub config: ConfigState,
}

impl AppState {
    /// Creates empty catalog and cart state for the given configuration.
    pub fn new(config: ConfigState) -> Self {
        AppState {
            catalog: CatalogState::new(),
            cart: CartState::new(),
            config,
        }
    }
}
