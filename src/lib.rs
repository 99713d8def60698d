//! # Tablero
//!
//! Economic indicators dashboard backend: a small set of Argentine economic
//! indicators, each with a short time series, served read-only over REST.
//!
//! ## Modules
//!
//! - [`store`]: Indicator types and the in-memory provider
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration and logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tablero::{serve, ApiConfig, AppState, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Build the provider once, then hand it to the API layer
//!     let store = Arc::new(MemoryStore::seeded());
//!
//!     let config = ApiConfig::default();
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    DataPoint, EconomicIndicator, IndicatorId, IndicatorProvider, MemoryStore, StoreError,
    StoreResult,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState, ErrorResponse};

pub use config::{Config, ConfigError, LoadReport, LoggingConfig};
