use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::assessment::{ContributingFactors, RiskAssessment};
use crate::domain::foundation::RiskScore;

/// Port for turning assessments into images.
///
/// Rendering is CPU-bound and bounded, so the port is synchronous. Theming is
/// passed explicitly on every call; implementations hold no style state.
pub trait ChartRenderer: Send + Sync {
    /// Score marker over the four category bands.
    fn render_risk_score(
        &self,
        assessment: &RiskAssessment,
        options: &ChartOptions,
    ) -> Result<Chart, ChartError>;

    /// Horizontal bars, one per contributing factor.
    fn render_contributing_factors(
        &self,
        factors: &ContributingFactors,
        options: &ChartOptions,
    ) -> Result<Chart, ChartError>;

    /// Projected risk across ages with the current age highlighted.
    fn render_timeline(
        &self,
        age: f64,
        score: RiskScore,
        options: &ChartOptions,
    ) -> Result<Chart, ChartError>;
}

/// A rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Visual theme for rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Grey panel with a white grid, top and right frame lines removed.
    #[default]
    Seaborn,
    /// White panel, full black frame, grey grid.
    Classic,
    /// White panel, no grid.
    Minimal,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 3] = [ChartStyle::Seaborn, ChartStyle::Classic, ChartStyle::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStyle::Seaborn => "seaborn",
            ChartStyle::Classic => "classic",
            ChartStyle::Minimal => "minimal",
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartStyle {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ChartError::UnknownStyle(s.to_string()))
    }
}

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub style: ChartStyle,
    pub width: u32,
    pub height: u32,
}

impl ChartOptions {
    /// Same dimensions, different style.
    pub fn with_style(self, style: ChartStyle) -> Self {
        Self { style, ..self }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            width: 800,
            height: 400,
        }
    }
}

/// Errors from chart rendering.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Unknown chart style: {0}")]
    UnknownStyle(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}
