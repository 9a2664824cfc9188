//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `app_router` stacks the shared middleware on top.

pub mod assessment;

use std::time::Duration;

use ::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use assessment::assessment_routes;
pub use assessment::AssessmentAppState;

/// Builds the full application router with CORS, tracing and timeout layers.
pub fn app_router(state: AssessmentAppState, server: &ServerConfig) -> Router {
    assessment_routes(state)
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Restricts to the configured origins, or allows any origin when none are set.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::charts::PlottersChartRenderer;
    use crate::ports::ChartOptions;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(cors_origins: Option<&str>) -> Router {
        let server = ServerConfig {
            cors_origins: cors_origins.map(str::to_string),
            ..Default::default()
        };
        let state = AssessmentAppState::new(
            Arc::new(PlottersChartRenderer::new()),
            ChartOptions::default(),
        );
        app_router(state, &server)
    }

    fn health_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn any_origin_allowed_without_configuration() {
        let response = router(None)
            .oneshot(health_from("http://example.test"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let response = router(Some("http://localhost:5173"))
            .oneshot(health_from("http://localhost:5173"))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_cors_header() {
        let response = router(Some("http://localhost:5173"))
            .oneshot(health_from("http://elsewhere.test"))
            .await
            .unwrap();

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
