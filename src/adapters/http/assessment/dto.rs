//! HTTP DTOs for assessment endpoints.
//!
//! Requests arrive with every field optional so a missing field can be
//! reported by name rather than as a generic deserialization failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::handlers::AssessRiskResult;
use crate::domain::assessment::{PatientAttributes, Preset, RiskCategory, RiskFactor};
use crate::domain::foundation::{round2, DomainError, ErrorCode, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body shared by the assess and plot endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    pub age: Option<f64>,
    pub bmi: Option<f64>,
    pub family_history: Option<bool>,
    pub breast_density: Option<String>,
    pub menopausal_status: Option<String>,
    pub hormone_use: Option<bool>,
    #[serde(default, deserialize_with = "whole_number")]
    pub previous_biopsies: Option<i64>,
    pub first_menstruation_age: Option<f64>,
    pub first_pregnancy_age: Option<f64>,
}

/// Accepts integers and floats without a fractional part (`2` or `2.0`).
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
    }

    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Integer(n)) => Ok(Some(n)),
        Some(Number::Float(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        Some(Number::Float(f)) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {f}"
        ))),
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing_field(field))
}

impl AssessmentRequest {
    /// Converts to raw attributes, reporting the first missing required field.
    pub fn into_attributes(self) -> Result<PatientAttributes, ValidationError> {
        Ok(PatientAttributes {
            age: required(self.age, "age")?,
            bmi: required(self.bmi, "bmi")?,
            family_history: required(self.family_history, "family_history")?,
            breast_density: required(self.breast_density, "breast_density")?,
            menopausal_status: required(self.menopausal_status, "menopausal_status")?,
            hormone_use: required(self.hormone_use, "hormone_use")?,
            previous_biopsies: required(self.previous_biopsies, "previous_biopsies")?,
            first_menstruation_age: required(self.first_menstruation_age, "first_menstruation_age")?,
            first_pregnancy_age: self.first_pregnancy_age,
        })
    }
}

/// Query parameters for the plot endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// One of `seaborn`, `classic`, `minimal`.
    pub style: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Service descriptor returned from `/`.
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl IndexResponse {
    pub fn describe() -> Self {
        let endpoints = [
            ("health", "/api/health"),
            ("presets", "/api/presets"),
            ("assess", "/api/assess"),
            ("plot_risk_score", "/api/plot/risk_score"),
            ("plot_factors", "/api/plot/factors"),
            ("plot_timeline", "/api/plot/timeline"),
        ]
        .into_iter()
        .collect();

        Self {
            message: "ONCOBRIDGE Breast Cancer Risk Assessment API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: "breast_cancer_risk_assessment",
        }
    }
}

/// Reference profiles keyed by preset name.
#[derive(Debug, Clone, Serialize)]
pub struct PresetsResponse {
    pub presets: BTreeMap<&'static str, PatientAttributes>,
}

impl PresetsResponse {
    pub fn all() -> Self {
        Self {
            presets: Preset::ALL
                .into_iter()
                .map(|preset| (preset.name(), preset.attributes()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub percentile_rank: f64,
    pub screening_frequency_months: u32,
    pub urgency_score: f64,
}

/// Assessment result with values rounded to two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub risk_score: f64,
    pub risk_category: RiskCategory,
    pub contributing_factors: BTreeMap<RiskFactor, f64>,
    pub recommendations: Vec<String>,
    pub metrics: MetricsResponse,
    pub patient_age: f64,
}

impl From<AssessRiskResult> for AssessmentResponse {
    fn from(result: AssessRiskResult) -> Self {
        let AssessRiskResult {
            profile,
            assessment,
            metrics,
        } = result;

        Self {
            risk_score: assessment.score().rounded(),
            risk_category: assessment.category(),
            contributing_factors: assessment
                .contributing_factors()
                .iter()
                .map(|(factor, value)| (*factor, round2(*value)))
                .collect(),
            recommendations: assessment.recommendations().to_vec(),
            metrics: MetricsResponse {
                percentile_rank: round2(metrics.percentile_rank),
                screening_frequency_months: metrics.screening_frequency_months,
                urgency_score: round2(metrics.urgency_score),
            },
            patient_age: profile.age(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = (!error.details.is_empty()).then(|| {
            let map: serde_json::Map<String, serde_json::Value> = error
                .details
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            serde_json::Value::Object(map)
        });

        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}
