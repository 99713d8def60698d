//! Tablero API Server
//!
//! Run with: cargo run --bin tablero-api [-- path/to/config.toml]
//!
//! # Configuration
//!
//! A TOML file (see `tablero-cli config`) plus environment overrides:
//! - `TABLERO_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TABLERO_PORT` / `PORT`: Port to listen on (default: 5000)
//! - `TABLERO_CORS_ORIGINS`: Comma-separated allowed origins (default: any)
//! - `TABLERO_LOG_LEVEL`, `TABLERO_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full filter directive, overrides the level

use std::path::PathBuf;
use std::sync::Arc;
use tablero::api::{serve, AppState};
use tablero::config::Config;
use tablero::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, load_report) = Config::load_default(config_path.as_deref())?;

    // Initialize tracing, then report how the config was resolved
    config.logging.init_tracing();
    load_report.log();

    tracing::info!("Starting Tablero API server v{}", env!("CARGO_PKG_VERSION"));

    // The indicator set is built once here and never mutated afterwards
    let store = MemoryStore::seeded();
    tracing::info!("Indicator store seeded with {} records", store.len());

    let state = AppState::new(Arc::new(store), config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Tablero API server stopped");
    Ok(())
}
