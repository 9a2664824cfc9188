//! Assessment query handlers.

mod assess_risk;
mod render_chart;

pub use assess_risk::{AssessRiskHandler, AssessRiskQuery, AssessRiskResult};
pub use render_chart::{ChartKind, RenderChartError, RenderChartHandler, RenderChartQuery};
