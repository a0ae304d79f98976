//! # iMarket Entry Point
//!
//! Starts the runtime, loads the catalog and logs what was loaded. A
//! renderer links the `imarket` library and drives the same commands.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create state objects (CatalogState, CartState, ConfigState)
//! 3. Fetch the product feed once
//! 4. Log a catalog summary

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    imarket::run().await;
}
