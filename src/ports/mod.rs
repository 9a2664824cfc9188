//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChartRenderer` - Turns assessments into images

mod chart_renderer;

pub use chart_renderer::{Chart, ChartError, ChartOptions, ChartRenderer, ChartStyle};
