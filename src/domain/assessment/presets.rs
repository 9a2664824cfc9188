//! Named reference profiles offered to clients as starting points.

use serde::{Deserialize, Serialize};

use super::profile::PatientAttributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Young, healthy woman with no significant risk factors.
    LowRisk,
    /// Middle-aged woman with some risk factors.
    ModerateRisk,
    /// Woman with family history and high breast density.
    HighRisk,
    /// Woman with multiple significant risk factors.
    VeryHighRisk,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::LowRisk,
        Preset::ModerateRisk,
        Preset::HighRisk,
        Preset::VeryHighRisk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::LowRisk => "low_risk",
            Preset::ModerateRisk => "moderate_risk",
            Preset::HighRisk => "high_risk",
            Preset::VeryHighRisk => "very_high_risk",
        }
    }

    pub fn attributes(&self) -> PatientAttributes {
        match self {
            Preset::LowRisk => PatientAttributes {
                age: 35.0,
                bmi: 22.0,
                family_history: false,
                breast_density: "low".to_string(),
                menopausal_status: "premenopausal".to_string(),
                hormone_use: false,
                previous_biopsies: 0,
                first_menstruation_age: 13.0,
                first_pregnancy_age: Some(28.0),
            },
            Preset::ModerateRisk => PatientAttributes {
                age: 52.0,
                bmi: 26.0,
                family_history: false,
                breast_density: "medium".to_string(),
                menopausal_status: "postmenopausal".to_string(),
                hormone_use: true,
                previous_biopsies: 1,
                first_menstruation_age: 12.0,
                first_pregnancy_age: Some(32.0),
            },
            Preset::HighRisk => PatientAttributes {
                age: 48.0,
                bmi: 28.0,
                family_history: true,
                breast_density: "high".to_string(),
                menopausal_status: "premenopausal".to_string(),
                hormone_use: false,
                previous_biopsies: 2,
                first_menstruation_age: 11.0,
                first_pregnancy_age: None,
            },
            Preset::VeryHighRisk => PatientAttributes {
                age: 55.0,
                bmi: 32.0,
                family_history: true,
                breast_density: "very_high".to_string(),
                menopausal_status: "postmenopausal".to_string(),
                hormone_use: true,
                previous_biopsies: 3,
                first_menstruation_age: 10.0,
                first_pregnancy_age: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::profile::PatientProfile;

    #[test]
    fn all_presets_pass_validation() {
        for preset in Preset::ALL {
            assert!(
                PatientProfile::validate(preset.attributes()).is_ok(),
                "{} should validate",
                preset.name()
            );
        }
    }

    #[test]
    fn preset_names_match_serde_names() {
        for preset in Preset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.name()));
        }
    }
}
