//! The risk assessment value object.

use crate::domain::foundation::RiskScore;

use super::advisor::Advisor;
use super::category::RiskCategory;
use super::metrics::RiskMetrics;
use super::profile::PatientProfile;
use super::scorer::{ContributingFactors, RiskScorer};

/// Result of assessing one validated profile. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    score: RiskScore,
    category: RiskCategory,
    contributing_factors: ContributingFactors,
    recommendations: Vec<String>,
}

impl RiskAssessment {
    /// Scores, categorizes and advises in one pass.
    pub fn assess(profile: &PatientProfile) -> Self {
        let (score, contributing_factors) = RiskScorer::score(profile);
        let category = RiskCategory::from_score(score);
        let recommendations = Advisor::recommend(score, category, profile);

        Self {
            score,
            category,
            contributing_factors,
            recommendations,
        }
    }

    pub fn score(&self) -> RiskScore {
        self.score
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    pub fn contributing_factors(&self) -> &ContributingFactors {
        &self.contributing_factors
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Derives secondary metrics for the assessed patient.
    pub fn metrics(&self, profile: &PatientProfile) -> RiskMetrics {
        RiskMetrics::derive(self.score, self.category, profile.age())
    }
}
