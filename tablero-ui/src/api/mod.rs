//! API Client
//!
//! HTTP access to the indicator endpoints.

pub mod client;

pub use client::fetch_indicators;
