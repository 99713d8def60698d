//! Chart Engine
//!
//! A small area-chart engine: [`model`] holds options, series and coordinate
//! mapping; [`canvas`] paints the model and tracks the crosshair.

pub mod canvas;
pub mod model;
pub mod options;

pub use canvas::{theme_from_document, CanvasChart};
pub use model::SeriesId;
pub use options::{AreaSeriesOptions, ChartOptions, ChartTheme};
