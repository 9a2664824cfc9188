//! Risk score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A risk score between 0 and 100 inclusive.
///
/// Construction always clamps, so a `RiskScore` can never leave the range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(0.0);

    /// Highest possible score.
    pub const MAX: Self = Self(100.0);

    /// Creates a score, clamping to `[0, 100]`. NaN collapses to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to two decimal places for display.
    pub fn rounded(&self) -> f64 {
        round2(self.0)
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
