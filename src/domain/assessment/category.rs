//! Risk category tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::RiskScore;

/// Lower bound (inclusive) of the moderate tier.
pub const MODERATE_THRESHOLD: f64 = 15.0;
/// Lower bound (inclusive) of the high tier.
pub const HIGH_THRESHOLD: f64 = 25.0;
/// Lower bound (inclusive) of the very high tier.
pub const VERY_HIGH_THRESHOLD: f64 = 40.0;

/// Ordered risk tier derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Low,
        RiskCategory::Moderate,
        RiskCategory::High,
        RiskCategory::VeryHigh,
    ];

    /// Determine the category from a score.
    /// - Low: score < 15
    /// - Moderate: 15 <= score < 25
    /// - High: 25 <= score < 40
    /// - VeryHigh: score >= 40
    pub fn from_score(score: RiskScore) -> Self {
        let s = score.value();
        if s < MODERATE_THRESHOLD {
            Self::Low
        } else if s < HIGH_THRESHOLD {
            Self::Moderate
        } else if s < VERY_HIGH_THRESHOLD {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Score interval `[lower, upper)` covered by this tier.
    pub fn score_range(&self) -> (f64, f64) {
        match self {
            Self::Low => (0.0, MODERATE_THRESHOLD),
            Self::Moderate => (MODERATE_THRESHOLD, HIGH_THRESHOLD),
            Self::High => (HIGH_THRESHOLD, VERY_HIGH_THRESHOLD),
            Self::VeryHigh => (VERY_HIGH_THRESHOLD, 100.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// Display label, e.g. "Very High".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Chart color (RGB).
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (0x2c, 0xa0, 0x2c),
            Self::Moderate => (0xff, 0xbb, 0x78),
            Self::High => (0xff, 0x7f, 0x0e),
            Self::VeryHigh => (0xd6, 0x27, 0x28),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
