//! Risk Scorer - additive rules over a validated patient profile.
//!
//! Every rule is evaluated independently against the profile; none of them
//! reads another rule's output. The sum is clamped to `[0, 100]`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::RiskScore;

use super::profile::{BreastDensity, MenopausalStatus, PatientProfile};

/// Baseline lifetime risk before any adjustment.
pub const BASE_RISK: f64 = 12.5;

const AGE_THRESHOLD: f64 = 50.0;
const AGE_WEIGHT: f64 = 0.5;
const POSTMENOPAUSAL_BMI_THRESHOLD: f64 = 25.0;
const POSTMENOPAUSAL_BMI_WEIGHT: f64 = 0.3;
const PREMENOPAUSAL_BMI_THRESHOLD: f64 = 30.0;
const PREMENOPAUSAL_BMI_WEIGHT: f64 = 0.2;
const FAMILY_HISTORY_WEIGHT: f64 = 15.0;
const HORMONE_USE_WEIGHT: f64 = 8.0;
const BIOPSY_WEIGHT: f64 = 2.0;
const EARLY_MENARCHE_AGE: f64 = 12.0;
const EARLY_MENSTRUATION_WEIGHT: f64 = 5.0;
const LATE_PREGNANCY_AGE: f64 = 30.0;
const NO_PREGNANCY_WEIGHT: f64 = 5.0;
const LATE_PREGNANCY_WEIGHT: f64 = 3.0;

/// A named scoring rule. Declaration order is rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Age,
    Bmi,
    FamilyHistory,
    BreastDensity,
    HormoneUse,
    PreviousBiopsies,
    EarlyMenstruation,
    NoPregnancy,
    LatePregnancy,
}

impl RiskFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::Age => "age",
            RiskFactor::Bmi => "bmi",
            RiskFactor::FamilyHistory => "family_history",
            RiskFactor::BreastDensity => "breast_density",
            RiskFactor::HormoneUse => "hormone_use",
            RiskFactor::PreviousBiopsies => "previous_biopsies",
            RiskFactor::EarlyMenstruation => "early_menstruation",
            RiskFactor::NoPregnancy => "no_pregnancy",
            RiskFactor::LatePregnancy => "late_pregnancy",
        }
    }

    /// Human-readable label, e.g. "Family History".
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contributions of the rules that fired, keyed and ordered by rule.
pub type ContributingFactors = BTreeMap<RiskFactor, f64>;

impl BreastDensity {
    /// Additive risk for this density.
    pub fn risk_weight(&self) -> f64 {
        match self {
            BreastDensity::Low => 0.0,
            BreastDensity::Medium => 3.0,
            BreastDensity::High => 8.0,
            BreastDensity::VeryHigh => 15.0,
        }
    }
}

/// Scores validated profiles.
pub struct RiskScorer;

impl RiskScorer {
    /// Computes the clamped risk score and the contribution of each fired rule.
    pub fn score(profile: &PatientProfile) -> (RiskScore, ContributingFactors) {
        let adjustments = [
            (RiskFactor::Age, Self::age_adjustment(profile)),
            (RiskFactor::Bmi, Self::bmi_adjustment(profile)),
            (RiskFactor::FamilyHistory, Self::family_history_adjustment(profile)),
            (RiskFactor::BreastDensity, Some(profile.breast_density().risk_weight())),
            (RiskFactor::HormoneUse, Self::hormone_use_adjustment(profile)),
            (RiskFactor::PreviousBiopsies, Self::biopsy_adjustment(profile)),
            (RiskFactor::EarlyMenstruation, Self::early_menstruation_adjustment(profile)),
        ];

        let mut factors: ContributingFactors = adjustments
            .into_iter()
            .filter_map(|(factor, adjustment)| adjustment.map(|value| (factor, value)))
            .filter(|(_, value)| *value != 0.0)
            .collect();

        if let Some((factor, value)) = Self::pregnancy_adjustment(profile) {
            factors.insert(factor, value);
        }

        let raw = BASE_RISK + factors.values().sum::<f64>();
        (RiskScore::clamped(raw), factors)
    }

    fn age_adjustment(profile: &PatientProfile) -> Option<f64> {
        (profile.age() >= AGE_THRESHOLD).then(|| (profile.age() - AGE_THRESHOLD) * AGE_WEIGHT)
    }

    fn bmi_adjustment(profile: &PatientProfile) -> Option<f64> {
        let bmi = profile.bmi();
        match profile.menopausal_status() {
            MenopausalStatus::Postmenopausal if bmi > POSTMENOPAUSAL_BMI_THRESHOLD => {
                Some((bmi - POSTMENOPAUSAL_BMI_THRESHOLD) * POSTMENOPAUSAL_BMI_WEIGHT)
            }
            MenopausalStatus::Premenopausal if bmi > PREMENOPAUSAL_BMI_THRESHOLD => {
                Some((bmi - PREMENOPAUSAL_BMI_THRESHOLD) * PREMENOPAUSAL_BMI_WEIGHT)
            }
            _ => None,
        }
    }

    fn family_history_adjustment(profile: &PatientProfile) -> Option<f64> {
        profile.family_history().then_some(FAMILY_HISTORY_WEIGHT)
    }

    fn hormone_use_adjustment(profile: &PatientProfile) -> Option<f64> {
        profile.hormone_use().then_some(HORMONE_USE_WEIGHT)
    }

    fn biopsy_adjustment(profile: &PatientProfile) -> Option<f64> {
        let count = profile.previous_biopsies();
        (count > 0).then(|| count as f64 * BIOPSY_WEIGHT)
    }

    fn early_menstruation_adjustment(profile: &PatientProfile) -> Option<f64> {
        (profile.first_menstruation_age() < EARLY_MENARCHE_AGE).then_some(EARLY_MENSTRUATION_WEIGHT)
    }

    fn pregnancy_adjustment(profile: &PatientProfile) -> Option<(RiskFactor, f64)> {
        match profile.first_pregnancy_age() {
            None => Some((RiskFactor::NoPregnancy, NO_PREGNANCY_WEIGHT)),
            Some(age) if age >= LATE_PREGNANCY_AGE => {
                Some((RiskFactor::LatePregnancy, LATE_PREGNANCY_WEIGHT))
            }
            Some(_) => None,
        }
    }
}
