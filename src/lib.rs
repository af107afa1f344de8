//! line-chart-rs: a small SVG line chart widget.
//!
//! The crate splits into pure chart math (`core`: dates, sample data, scales,
//! line paths), scene construction (`render`: SVG element tree, axes and the
//! container contract) and the widget facade (`api::ChartRenderer`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartOptions, ChartRenderer};
pub use error::{ChartError, ChartResult};
