//! Chart rendering adapter backed by plotters.

mod plotters_renderer;
mod theme;

pub use plotters_renderer::{PlottersChartRenderer, SVG_CONTENT_TYPE};

use crate::ports::ChartError;

pub(crate) fn render_error<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}
