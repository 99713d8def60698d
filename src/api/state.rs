//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

use crate::store::IndicatorProvider;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only indicator source, built once at startup
    pub indicators: Arc<dyn IndicatorProvider>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(indicators: Arc<dyn IndicatorProvider>, config: ApiConfig) -> Self {
        Self {
            indicators,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr() {
        assert_eq!(ApiConfig::default().addr(), "0.0.0.0:5000");
        assert_eq!(ApiConfig::new("127.0.0.1", 8080).addr(), "127.0.0.1:8080");
    }
}
