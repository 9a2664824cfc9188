//! Patient attributes and the validated patient profile.
//!
//! `PatientAttributes` is what arrives from the outside world: enumerations are
//! still text and counts are signed. `PatientProfile::validate` is the only way
//! to obtain a `PatientProfile`, which is the only input the scorer accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Upper bound for age in years.
pub const MAX_AGE: f64 = 120.0;
/// Upper bound for body-mass index.
pub const MAX_BMI: f64 = 60.0;
/// Earliest accepted age at first menstruation.
pub const MIN_MENARCHE_AGE: f64 = 8.0;
/// Latest accepted age at first menstruation.
pub const MAX_MENARCHE_AGE: f64 = 20.0;
/// Latest accepted age at first pregnancy.
pub const MAX_FIRST_PREGNANCY_AGE: f64 = 60.0;

/// Mammographic breast density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreastDensity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl BreastDensity {
    pub const ALL: [BreastDensity; 4] = [
        BreastDensity::Low,
        BreastDensity::Medium,
        BreastDensity::High,
        BreastDensity::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BreastDensity::Low => "low",
            BreastDensity::Medium => "medium",
            BreastDensity::High => "high",
            BreastDensity::VeryHigh => "very_high",
        }
    }

    /// Dense tissue both raises risk and hides lesions on a mammogram.
    pub fn is_dense(&self) -> bool {
        matches!(self, BreastDensity::High | BreastDensity::VeryHigh)
    }
}

impl fmt::Display for BreastDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreastDensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreastDensity::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = BreastDensity::ALL.iter().map(|d| d.as_str()).collect();
                ValidationError::invalid_choice("breast_density", &allowed, s)
            })
    }
}

/// Menopausal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenopausalStatus {
    Premenopausal,
    Postmenopausal,
}

impl MenopausalStatus {
    pub const ALL: [MenopausalStatus; 2] =
        [MenopausalStatus::Premenopausal, MenopausalStatus::Postmenopausal];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenopausalStatus::Premenopausal => "premenopausal",
            MenopausalStatus::Postmenopausal => "postmenopausal",
        }
    }
}

impl fmt::Display for MenopausalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenopausalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenopausalStatus::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> =
                    MenopausalStatus::ALL.iter().map(|m| m.as_str()).collect();
                ValidationError::invalid_choice("menopausal_status", &allowed, s)
            })
    }
}

/// Unvalidated patient attributes as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAttributes {
    pub age: f64,
    pub bmi: f64,
    pub family_history: bool,
    pub breast_density: String,
    pub menopausal_status: String,
    pub hormone_use: bool,
    pub previous_biopsies: i64,
    pub first_menstruation_age: f64,
    pub first_pregnancy_age: Option<f64>,
}

/// A patient profile whose every field has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientProfile {
    age: f64,
    bmi: f64,
    family_history: bool,
    breast_density: BreastDensity,
    menopausal_status: MenopausalStatus,
    hormone_use: bool,
    previous_biopsies: u64,
    first_menstruation_age: f64,
    first_pregnancy_age: Option<f64>,
}

impl PatientProfile {
    /// Validates raw attributes, reporting the first violated constraint.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the offending field when:
    /// - age is not in `(0, 120]`
    /// - bmi is not in `(0, 60]`
    /// - previous_biopsies is negative
    /// - first_menstruation_age is not in `[8, 20]`
    /// - first_pregnancy_age is present and not in `[first_menstruation_age, 60]`
    /// - breast_density or menopausal_status is not a known value
    pub fn validate(attributes: PatientAttributes) -> Result<Self, ValidationError> {
        let PatientAttributes {
            age,
            bmi,
            family_history,
            breast_density,
            menopausal_status,
            hormone_use,
            previous_biopsies,
            first_menstruation_age,
            first_pregnancy_age,
        } = attributes;

        if !(age > 0.0 && age <= MAX_AGE) {
            return Err(ValidationError::out_of_range("age", "(0, 120]", age));
        }
        if !(bmi > 0.0 && bmi <= MAX_BMI) {
            return Err(ValidationError::out_of_range("bmi", "(0, 60]", bmi));
        }
        let previous_biopsies = u64::try_from(previous_biopsies).map_err(|_| {
            ValidationError::out_of_range("previous_biopsies", "[0, ∞)", previous_biopsies as f64)
        })?;
        if !(MIN_MENARCHE_AGE..=MAX_MENARCHE_AGE).contains(&first_menstruation_age) {
            return Err(ValidationError::out_of_range(
                "first_menstruation_age",
                "[8, 20]",
                first_menstruation_age,
            ));
        }
        if let Some(pregnancy_age) = first_pregnancy_age {
            if !(first_menstruation_age..=MAX_FIRST_PREGNANCY_AGE).contains(&pregnancy_age) {
                return Err(ValidationError::out_of_range(
                    "first_pregnancy_age",
                    format!("[{}, 60]", first_menstruation_age),
                    pregnancy_age,
                ));
            }
        }
        let breast_density = breast_density.parse::<BreastDensity>()?;
        let menopausal_status = menopausal_status.parse::<MenopausalStatus>()?;

        Ok(Self {
            age,
            bmi,
            family_history,
            breast_density,
            menopausal_status,
            hormone_use,
            previous_biopsies,
            first_menstruation_age,
            first_pregnancy_age,
        })
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn family_history(&self) -> bool {
        self.family_history
    }

    pub fn breast_density(&self) -> BreastDensity {
        self.breast_density
    }

    pub fn menopausal_status(&self) -> MenopausalStatus {
        self.menopausal_status
    }

    pub fn hormone_use(&self) -> bool {
        self.hormone_use
    }

    pub fn previous_biopsies(&self) -> u64 {
        self.previous_biopsies
    }

    pub fn first_menstruation_age(&self) -> f64 {
        self.first_menstruation_age
    }

    pub fn first_pregnancy_age(&self) -> Option<f64> {
        self.first_pregnancy_age
    }

    /// Converts back to raw attributes, e.g. for echoing presets.
    pub fn to_attributes(&self) -> PatientAttributes {
        PatientAttributes {
            age: self.age,
            bmi: self.bmi,
            family_history: self.family_history,
            breast_density: self.breast_density.as_str().to_string(),
            menopausal_status: self.menopausal_status.as_str().to_string(),
            hormone_use: self.hormone_use,
            // Validated from a non-negative i64, so it fits.
            previous_biopsies: self.previous_biopsies as i64,
            first_menstruation_age: self.first_menstruation_age,
            first_pregnancy_age: self.first_pregnancy_age,
        }
    }
}
