//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `charts` - SVG chart rendering via plotters
//! - `http` - REST API via axum

pub mod charts;
pub mod http;

pub use charts::PlottersChartRenderer;
pub use self::http::{app_router, AssessmentAppState};
