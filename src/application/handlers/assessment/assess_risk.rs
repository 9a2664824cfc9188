//! AssessRiskHandler - Query handler for scoring a patient profile.
//!
//! Validates the raw attributes, runs the scorer, categorizer and advisor, and
//! derives the secondary metrics.

use crate::domain::assessment::{PatientAttributes, PatientProfile, RiskAssessment, RiskMetrics};
use crate::domain::foundation::ValidationError;

/// Query to assess one patient.
#[derive(Debug, Clone)]
pub struct AssessRiskQuery {
    pub attributes: PatientAttributes,
}

/// Result of a successful assessment.
#[derive(Debug, Clone)]
pub struct AssessRiskResult {
    pub profile: PatientProfile,
    pub assessment: RiskAssessment,
    pub metrics: RiskMetrics,
}

/// Handler for risk assessment queries.
///
/// Stateless; every call works on its own validated profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessRiskHandler;

impl AssessRiskHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AssessRiskQuery) -> Result<AssessRiskResult, ValidationError> {
        let profile = PatientProfile::validate(query.attributes)?;
        let assessment = RiskAssessment::assess(&profile);
        let metrics = assessment.metrics(&profile);

        tracing::debug!(
            score = assessment.score().value(),
            category = %assessment.category(),
            factors = assessment.contributing_factors().len(),
            "Risk assessment completed"
        );

        Ok(AssessRiskResult {
            profile,
            assessment,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Preset, RiskCategory};

    fn query(attributes: PatientAttributes) -> AssessRiskQuery {
        AssessRiskQuery { attributes }
    }

    #[test]
    fn assesses_low_risk_preset() {
        let result = AssessRiskHandler::new()
            .handle(query(Preset::LowRisk.attributes()))
            .unwrap();

        assert_eq!(result.assessment.score().value(), 12.5);
        assert_eq!(result.assessment.category(), RiskCategory::Low);
        assert!(result.assessment.contributing_factors().is_empty());
        assert_eq!(result.metrics.percentile_rank, 50.0);
        assert_eq!(result.metrics.screening_frequency_months, 24);
        assert_eq!(result.metrics.urgency_score, 0.25);
    }

    #[test]
    fn assesses_very_high_risk_preset() {
        let result = AssessRiskHandler::new()
            .handle(query(Preset::VeryHighRisk.attributes()))
            .unwrap();

        assert!((result.assessment.score().value() - 71.1).abs() < 1e-9);
        assert_eq!(result.assessment.category(), RiskCategory::VeryHigh);
        assert_eq!(result.metrics.screening_frequency_months, 6);
        assert_eq!(result.metrics.urgency_score, 1.0);
        assert_eq!(result.profile.age(), 55.0);
    }

    #[test]
    fn invalid_attributes_are_rejected_before_scoring() {
        let mut attributes = Preset::LowRisk.attributes();
        attributes.age = 0.0;

        let err = AssessRiskHandler::new().handle(query(attributes)).unwrap_err();
        assert_eq!(err.field(), "age");
    }
}
