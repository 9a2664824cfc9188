//! RenderChartHandler - Query handler for assessment charts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assessment::{PatientAttributes, PatientProfile, RiskAssessment};
use crate::domain::foundation::ValidationError;
use crate::ports::{Chart, ChartError, ChartOptions, ChartRenderer, ChartStyle};

/// Which chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    RiskScore,
    ContributingFactors,
    Timeline,
}

/// Query to render one chart for a patient.
#[derive(Debug, Clone)]
pub struct RenderChartQuery {
    pub kind: ChartKind,
    pub attributes: PatientAttributes,
    /// Overrides the configured style for this call.
    pub style: Option<ChartStyle>,
}

/// Errors from chart rendering queries.
#[derive(Debug, Error)]
pub enum RenderChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Handler for chart queries.
pub struct RenderChartHandler {
    renderer: Arc<dyn ChartRenderer>,
    defaults: ChartOptions,
}

impl RenderChartHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>, defaults: ChartOptions) -> Self {
        Self { renderer, defaults }
    }

    pub fn handle(&self, query: RenderChartQuery) -> Result<Chart, RenderChartError> {
        let profile = PatientProfile::validate(query.attributes)?;
        let assessment = RiskAssessment::assess(&profile);
        let options = match query.style {
            Some(style) => self.defaults.with_style(style),
            None => self.defaults,
        };

        let chart = match query.kind {
            ChartKind::RiskScore => self.renderer.render_risk_score(&assessment, &options),
            ChartKind::ContributingFactors => self
                .renderer
                .render_contributing_factors(assessment.contributing_factors(), &options),
            ChartKind::Timeline => {
                self.renderer
                    .render_timeline(profile.age(), assessment.score(), &options)
            }
        }?;

        tracing::debug!(
            kind = ?query.kind,
            style = %options.style,
            bytes = chart.body.len(),
            "Chart rendered"
        );

        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{ContributingFactors, Preset};
    use crate::domain::foundation::RiskScore;
    use std::sync::Mutex;

    /// Records the call it received instead of drawing anything.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<(&'static str, ChartStyle)>>,
        fail: bool,
    }

    impl RecordingRenderer {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn record(&self, name: &'static str, options: &ChartOptions) -> Result<Chart, ChartError> {
            if self.fail {
                return Err(ChartError::Render("backend unavailable".to_string()));
            }
            self.calls.lock().unwrap().push((name, options.style));
            Ok(Chart {
                content_type: "text/plain",
                body: name.as_bytes().to_vec(),
            })
        }
    }

    impl ChartRenderer for RecordingRenderer {
        fn render_risk_score(
            &self,
            _assessment: &RiskAssessment,
            options: &ChartOptions,
        ) -> Result<Chart, ChartError> {
            self.record("risk_score", options)
        }

        fn render_contributing_factors(
            &self,
            _factors: &ContributingFactors,
            options: &ChartOptions,
        ) -> Result<Chart, ChartError> {
            self.record("factors", options)
        }

        fn render_timeline(
            &self,
            _age: f64,
            _score: RiskScore,
            options: &ChartOptions,
        ) -> Result<Chart, ChartError> {
            self.record("timeline", options)
        }
    }

    fn query(kind: ChartKind, style: Option<ChartStyle>) -> RenderChartQuery {
        RenderChartQuery {
            kind,
            attributes: Preset::HighRisk.attributes(),
            style,
        }
    }

    #[test]
    fn dispatches_to_matching_renderer_method() {
        let renderer = Arc::new(RecordingRenderer::default());
        let handler = RenderChartHandler::new(renderer.clone(), ChartOptions::default());

        handler.handle(query(ChartKind::RiskScore, None)).unwrap();
        handler.handle(query(ChartKind::ContributingFactors, None)).unwrap();
        let chart = handler.handle(query(ChartKind::Timeline, None)).unwrap();

        assert_eq!(chart.body, b"timeline".to_vec());
        let names: Vec<_> = renderer.calls.lock().unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["risk_score", "factors", "timeline"]);
    }

    #[test]
    fn style_override_replaces_configured_style() {
        let renderer = Arc::new(RecordingRenderer::default());
        let handler = RenderChartHandler::new(renderer.clone(), ChartOptions::default());

        handler
            .handle(query(ChartKind::RiskScore, Some(ChartStyle::Classic)))
            .unwrap();
        handler.handle(query(ChartKind::RiskScore, None)).unwrap();

        let styles: Vec<_> = renderer.calls.lock().unwrap().iter().map(|(_, s)| *s).collect();
        assert_eq!(styles, vec![ChartStyle::Classic, ChartStyle::Seaborn]);
    }

    #[test]
    fn invalid_profile_never_reaches_renderer() {
        let renderer = Arc::new(RecordingRenderer::default());
        let handler = RenderChartHandler::new(renderer.clone(), ChartOptions::default());
        let mut bad = query(ChartKind::Timeline, None);
        bad.attributes.breast_density = "extreme".to_string();

        let err = handler.handle(bad).unwrap_err();
        assert!(matches!(err, RenderChartError::Validation(_)));
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn renderer_failure_is_surfaced() {
        let handler =
            RenderChartHandler::new(Arc::new(RecordingRenderer::failing()), ChartOptions::default());

        let err = handler.handle(query(ChartKind::RiskScore, None)).unwrap_err();
        assert!(matches!(err, RenderChartError::Chart(ChartError::Render(_))));
    }
}
