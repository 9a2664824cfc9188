//! HTTP routes for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    assess, health, index, plot_factors, plot_risk_score, plot_timeline, presets,
    AssessmentAppState,
};

/// Creates the assessment router with all routes.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/presets", get(presets))
        .route("/api/assess", post(assess))
        .route("/api/plot/risk_score", post(plot_risk_score))
        .route("/api/plot/factors", post(plot_factors))
        .route("/api/plot/timeline", post(plot_timeline))
        .with_state(state)
}
