//! Tablero Indicator Store
//!
//! - **types**: `DataPoint`, `EconomicIndicator`, `IndicatorId`
//! - **memory**: `IndicatorProvider` trait and the in-memory `MemoryStore`
//! - **seed**: the built-in indicator set
//! - **error**: error types
//!
//! The store is constructed once at startup and handed to the API layer; it
//! is never mutated afterwards.
//!
//! # Example
//!
//! ```rust,no_run
//! use tablero::store::{IndicatorProvider, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::seeded();
//!
//!     let all = store.list().await?;
//!     let inflation = store.get_by_id("inflacion").await?;
//!
//!     println!("{} indicators, inflation present: {}", all.len(), inflation.is_some());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod seed;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use memory::{IndicatorProvider, MemoryStore};
pub use seed::default_indicators;
pub use types::{DataPoint, EconomicIndicator, IndicatorId};
