//! Recommendation rules.

use crate::domain::foundation::RiskScore;

use super::category::RiskCategory;
use super::profile::PatientProfile;

const HEALTHY_BMI_LIMIT: f64 = 25.0;
const HORMONE_DISCUSSION_SCORE: f64 = 20.0;

pub const ANNUAL_MAMMOGRAM: &str = "Schedule annual mammogram screening";
pub const GENETIC_COUNSELING: &str = "Consider genetic counseling if family history present";
pub const HEALTHY_WEIGHT: &str = "Maintain healthy weight through diet and exercise";
pub const HORMONE_THERAPY: &str = "Discuss hormone therapy risks with your physician";
pub const ADDITIONAL_SCREENING: &str = "Consider additional screening modalities (ultrasound, MRI)";
pub const SELF_EXAMINATION: &str = "Continue regular self-examinations";
pub const STANDARD_GUIDELINES: &str = "Follow standard screening guidelines for your age";
pub const REGULAR_SCREENING: &str = "Maintain regular screening schedule";
pub const HEALTHY_LIFESTYLE: &str = "Continue healthy lifestyle practices";

/// Produces ordered recommendations for an assessed profile.
pub struct Advisor;

impl Advisor {
    /// Evaluates each rule independently, in fixed order. Never returns an
    /// empty list.
    pub fn recommend(
        score: RiskScore,
        category: RiskCategory,
        profile: &PatientProfile,
    ) -> Vec<String> {
        let mut recommendations: Vec<&'static str> = Vec::new();

        if category >= RiskCategory::High {
            recommendations.push(ANNUAL_MAMMOGRAM);
            recommendations.push(GENETIC_COUNSELING);
        }
        if profile.bmi() > HEALTHY_BMI_LIMIT {
            recommendations.push(HEALTHY_WEIGHT);
        }
        if profile.hormone_use() && score.value() > HORMONE_DISCUSSION_SCORE {
            recommendations.push(HORMONE_THERAPY);
        }
        if profile.breast_density().is_dense() {
            recommendations.push(ADDITIONAL_SCREENING);
        }
        if category == RiskCategory::Low {
            recommendations.push(SELF_EXAMINATION);
            recommendations.push(STANDARD_GUIDELINES);
        }
        if recommendations.is_empty() {
            recommendations.push(REGULAR_SCREENING);
            recommendations.push(HEALTHY_LIFESTYLE);
        }

        recommendations.into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::profile::PatientAttributes;

    fn profile(bmi: f64, hormone_use: bool, density: &str) -> PatientProfile {
        PatientProfile::validate(PatientAttributes {
            age: 45.0,
            bmi,
            family_history: false,
            breast_density: density.to_string(),
            menopausal_status: "premenopausal".to_string(),
            hormone_use,
            previous_biopsies: 0,
            first_menstruation_age: 13.0,
            first_pregnancy_age: Some(28.0),
        })
        .unwrap()
    }

    fn recommend(score: f64, profile: &PatientProfile) -> Vec<String> {
        let score = RiskScore::clamped(score);
        Advisor::recommend(score, RiskCategory::from_score(score), profile)
    }

    #[test]
    fn low_score_suggests_self_examination() {
        let recs = recommend(12.5, &profile(22.0, false, "low"));
        assert_eq!(recs, vec![SELF_EXAMINATION, STANDARD_GUIDELINES]);
    }

    #[test]
    fn moderate_score_without_triggers_falls_back_to_generic_advice() {
        let recs = recommend(18.0, &profile(22.0, false, "medium"));
        assert_eq!(recs, vec![REGULAR_SCREENING, HEALTHY_LIFESTYLE]);
    }

    #[test]
    fn high_score_suggests_mammogram_and_counseling_first() {
        let recs = recommend(25.0, &profile(22.0, false, "low"));
        assert_eq!(recs, vec![ANNUAL_MAMMOGRAM, GENETIC_COUNSELING]);
    }

    #[test]
    fn rules_append_in_fixed_order() {
        let recs = recommend(45.0, &profile(31.0, true, "very_high"));
        assert_eq!(
            recs,
            vec![
                ANNUAL_MAMMOGRAM,
                GENETIC_COUNSELING,
                HEALTHY_WEIGHT,
                HORMONE_THERAPY,
                ADDITIONAL_SCREENING,
            ]
        );
    }

    #[test]
    fn hormone_advice_requires_score_above_twenty() {
        let recs = recommend(20.0, &profile(22.0, true, "low"));
        assert!(!recs.iter().any(|r| r == HORMONE_THERAPY));

        let recs = recommend(20.5, &profile(22.0, true, "low"));
        assert_eq!(recs, vec![HORMONE_THERAPY]);
    }

    #[test]
    fn bmi_of_exactly_twenty_five_does_not_trigger_weight_advice() {
        let recs = recommend(12.5, &profile(25.0, false, "low"));
        assert!(!recs.iter().any(|r| r == HEALTHY_WEIGHT));
    }

    #[test]
    fn dense_tissue_adds_screening_modalities_even_when_low() {
        let recs = recommend(14.0, &profile(22.0, false, "high"));
        assert_eq!(
            recs,
            vec![ADDITIONAL_SCREENING, SELF_EXAMINATION, STANDARD_GUIDELINES]
        );
    }
}
