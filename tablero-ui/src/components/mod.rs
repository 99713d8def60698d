//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod header;
pub mod indicator_card;
pub mod indicator_modal;
pub mod loading;

pub use chart::EconomicChart;
pub use header::Header;
pub use indicator_card::IndicatorCard;
pub use indicator_modal::IndicatorModal;
pub use loading::CardSkeleton;
