//! Secondary metrics derived from an assessment.
//!
//! The percentile buckets and screening intervals are coarse literal tables,
//! not a fitted distribution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RiskScore;

use super::category::RiskCategory;

/// Score at which urgency saturates at 1.0.
pub const URGENCY_SATURATION_SCORE: f64 = 50.0;

/// `(exclusive upper score bound, percentile)`; scores past the last bound get 98.
const PERCENTILE_BUCKETS: [(f64, f64); 4] = [(10.0, 20.0), (15.0, 50.0), (25.0, 75.0), (40.0, 90.0)];
const TOP_PERCENTILE: f64 = 98.0;

/// Derived metrics for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Where the score falls in the reference population (bucketed).
    pub percentile_rank: f64,
    /// Recommended interval between screenings, in months.
    pub screening_frequency_months: u32,
    /// 0-1 signal of how pressing follow-up is.
    pub urgency_score: f64,
}

impl RiskMetrics {
    /// Derives all metrics from the score, its category and the patient's age.
    pub fn derive(score: RiskScore, category: RiskCategory, age: f64) -> Self {
        Self {
            percentile_rank: percentile_rank(score),
            screening_frequency_months: screening_frequency_months(category, age),
            urgency_score: urgency(score),
        }
    }
}

/// Percentile bucket for a score.
pub fn percentile_rank(score: RiskScore) -> f64 {
    PERCENTILE_BUCKETS
        .iter()
        .find(|(upper, _)| score.value() < *upper)
        .map(|(_, percentile)| *percentile)
        .unwrap_or(TOP_PERCENTILE)
}

/// Screening interval in months. Low-risk intervals shorten with age.
pub fn screening_frequency_months(category: RiskCategory, age: f64) -> u32 {
    match category {
        RiskCategory::VeryHigh => 6,
        RiskCategory::High | RiskCategory::Moderate => 12,
        RiskCategory::Low if age < 40.0 => 24,
        RiskCategory::Low if age < 50.0 => 18,
        RiskCategory::Low => 12,
    }
}

/// `min(1, score / 50)`.
pub fn urgency(score: RiskScore) -> f64 {
    (score.value() / URGENCY_SATURATION_SCORE).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: f64) -> RiskScore {
        RiskScore::clamped(value)
    }

    #[test]
    fn percentile_follows_bucket_table() {
        assert_eq!(percentile_rank(score(0.0)), 20.0);
        assert_eq!(percentile_rank(score(9.99)), 20.0);
        assert_eq!(percentile_rank(score(10.0)), 50.0);
        assert_eq!(percentile_rank(score(12.5)), 50.0);
        assert_eq!(percentile_rank(score(15.0)), 75.0);
        assert_eq!(percentile_rank(score(25.0)), 90.0);
        assert_eq!(percentile_rank(score(40.0)), 98.0);
        assert_eq!(percentile_rank(score(100.0)), 98.0);
    }

    #[test]
    fn screening_by_category() {
        assert_eq!(screening_frequency_months(RiskCategory::VeryHigh, 30.0), 6);
        assert_eq!(screening_frequency_months(RiskCategory::High, 30.0), 12);
        assert_eq!(screening_frequency_months(RiskCategory::Moderate, 30.0), 12);
    }

    #[test]
    fn low_risk_screening_depends_on_age() {
        assert_eq!(screening_frequency_months(RiskCategory::Low, 35.0), 24);
        assert_eq!(screening_frequency_months(RiskCategory::Low, 40.0), 18);
        assert_eq!(screening_frequency_months(RiskCategory::Low, 49.9), 18);
        assert_eq!(screening_frequency_months(RiskCategory::Low, 50.0), 12);
    }

    #[test]
    fn urgency_scales_and_saturates() {
        assert_eq!(urgency(score(0.0)), 0.0);
        assert_eq!(urgency(score(12.5)), 0.25);
        assert_eq!(urgency(score(25.0)), 0.5);
        assert_eq!(urgency(score(50.0)), 1.0);
        assert_eq!(urgency(score(80.0)), 1.0);
    }

    #[test]
    fn derive_combines_all_metrics() {
        let metrics = RiskMetrics::derive(score(12.5), RiskCategory::Low, 35.0);
        assert_eq!(
            metrics,
            RiskMetrics {
                percentile_rank: 50.0,
                screening_frequency_months: 24,
                urgency_score: 0.25,
            }
        );
    }

    #[test]
    fn derive_is_deterministic() {
        let a = RiskMetrics::derive(score(33.3), RiskCategory::High, 61.0);
        let b = RiskMetrics::derive(score(33.3), RiskCategory::High, 61.0);
        assert_eq!(a, b);
    }
}
