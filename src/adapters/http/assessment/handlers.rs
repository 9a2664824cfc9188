//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    AssessRiskHandler, AssessRiskQuery, ChartKind, RenderChartError, RenderChartHandler,
    RenderChartQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{ChartOptions, ChartRenderer, ChartStyle};

use super::dto::{
    AssessmentRequest, AssessmentResponse, ChartParams, ErrorResponse, HealthResponse,
    IndexResponse, PresetsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Assessment API error that implements IntoResponse.
#[derive(Debug)]
pub enum AssessmentApiError {
    /// Caller input was rejected; reported back verbatim.
    BadRequest(DomainError),
    /// Server-side fault; logged, reported generically.
    Internal(DomainError),
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(err) => {
                tracing::debug!(code = %err.code(), message = %err.message(), "Request rejected");
                (StatusCode::BAD_REQUEST, ErrorResponse::from(&err))
            }
            AssessmentApiError::Internal(err) => {
                tracing::error!(code = %err.code(), error = %err.message(), "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for AssessmentApiError {
    fn from(error: DomainError) -> Self {
        if error.code().is_client_error() {
            AssessmentApiError::BadRequest(error)
        } else {
            AssessmentApiError::Internal(error)
        }
    }
}

impl From<ValidationError> for AssessmentApiError {
    fn from(error: ValidationError) -> Self {
        DomainError::from(error).into()
    }
}

impl From<JsonRejection> for AssessmentApiError {
    fn from(rejection: JsonRejection) -> Self {
        DomainError::new(ErrorCode::MalformedRequest, rejection.body_text()).into()
    }
}

impl From<RenderChartError> for AssessmentApiError {
    fn from(error: RenderChartError) -> Self {
        match error {
            RenderChartError::Validation(err) => err.into(),
            RenderChartError::Chart(err) => {
                DomainError::new(ErrorCode::ChartRenderFailed, err.to_string()).into()
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing assessment dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub chart_renderer: Arc<dyn ChartRenderer>,
    pub chart_options: ChartOptions,
}

impl AssessmentAppState {
    pub fn new(chart_renderer: Arc<dyn ChartRenderer>, chart_options: ChartOptions) -> Self {
        Self {
            chart_renderer,
            chart_options,
        }
    }

    pub fn assess_risk_handler(&self) -> AssessRiskHandler {
        AssessRiskHandler::new()
    }

    pub fn render_chart_handler(&self) -> RenderChartHandler {
        RenderChartHandler::new(self.chart_renderer.clone(), self.chart_options)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::describe())
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /api/presets
pub async fn presets() -> Json<PresetsResponse> {
    Json(PresetsResponse::all())
}

/// POST /api/assess
///
/// Validates the profile and returns score, category, factors,
/// recommendations and metrics.
pub async fn assess(
    State(state): State<AssessmentAppState>,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AssessmentApiError> {
    let Json(request) = body?;
    let query = AssessRiskQuery {
        attributes: request.into_attributes()?,
    };

    let result = state.assess_risk_handler().handle(query)?;

    Ok(Json(AssessmentResponse::from(result)))
}

/// POST /api/plot/risk_score
pub async fn plot_risk_score(
    state: State<AssessmentAppState>,
    params: Query<ChartParams>,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Response, AssessmentApiError> {
    render(ChartKind::RiskScore, state, params, body)
}

/// POST /api/plot/factors
pub async fn plot_factors(
    state: State<AssessmentAppState>,
    params: Query<ChartParams>,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Response, AssessmentApiError> {
    render(ChartKind::ContributingFactors, state, params, body)
}

/// POST /api/plot/timeline
pub async fn plot_timeline(
    state: State<AssessmentAppState>,
    params: Query<ChartParams>,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Response, AssessmentApiError> {
    render(ChartKind::Timeline, state, params, body)
}

fn render(
    kind: ChartKind,
    State(state): State<AssessmentAppState>,
    Query(params): Query<ChartParams>,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Response, AssessmentApiError> {
    let Json(request) = body?;
    let style = params
        .style
        .map(|name| {
            name.parse::<ChartStyle>().map_err(|err| {
                DomainError::invalid_parameter("style", err.to_string())
            })
        })
        .transpose()?;

    let query = RenderChartQuery {
        kind,
        attributes: request.into_attributes()?,
        style,
    };

    let chart = state.render_chart_handler().handle(query)?;

    Ok(([(header::CONTENT_TYPE, chart.content_type)], chart.body).into_response())
}
