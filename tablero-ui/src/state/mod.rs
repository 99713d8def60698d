//! State Management
//!
//! Indicator types and the framework-independent page state: the dashboard
//! view machine and the modal selection.

pub mod dashboard;
pub mod indicator;
pub mod selection;

pub use dashboard::{DashboardView, FetchState};
pub use indicator::{DataPoint, EconomicIndicator};
pub use selection::{Selection, CLEAR_DELAY_MS};
