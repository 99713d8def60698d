//! Data Transfer Objects
//!
//! Indicator responses reuse the store types directly (their serde shape is
//! the wire shape). Only the health endpoint has its own body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Number of indicators the provider reports, when it answered
    pub indicators: Option<usize>,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Startup time
    pub started_at: DateTime<Utc>,
    /// Server version
    pub version: String,
}
