//! Linear age-based extrapolation of the current score, used by the timeline chart.

use std::ops::Range;

use crate::domain::foundation::RiskScore;

/// Ages covered by the projection, in whole years.
pub const PROJECTION_AGES: Range<u32> = 30..80;

/// Relative change in risk per year away from the current age.
const YEARLY_GROWTH: f64 = 0.02;

/// One projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub age: f64,
    pub risk: RiskScore,
}

/// Projects `score` across [`PROJECTION_AGES`], anchored at the patient's age.
pub fn project(current_age: f64, score: RiskScore) -> Vec<ProjectionPoint> {
    PROJECTION_AGES
        .map(|year| {
            let age = f64::from(year);
            let risk = score.value() * (1.0 + (age - current_age) * YEARLY_GROWTH);
            ProjectionPoint {
                age,
                risk: RiskScore::clamped(risk),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_covers_thirty_to_seventy_nine() {
        let points = project(45.0, RiskScore::clamped(20.0));
        assert_eq!(points.len(), 50);
        assert_eq!(points.first().unwrap().age, 30.0);
        assert_eq!(points.last().unwrap().age, 79.0);
    }

    #[test]
    fn projection_passes_through_current_score_at_current_age() {
        let points = project(45.0, RiskScore::clamped(20.0));
        let at_age = points.iter().find(|p| p.age == 45.0).unwrap();
        assert_eq!(at_age.risk.value(), 20.0);
    }

    #[test]
    fn projection_grows_two_percent_per_year() {
        let points = project(40.0, RiskScore::clamped(10.0));
        let at_50 = points.iter().find(|p| p.age == 50.0).unwrap();
        assert!((at_50.risk.value() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn projection_is_clamped() {
        let points = project(30.0, RiskScore::clamped(90.0));
        assert!(points.iter().all(|p| p.risk.value() <= 100.0));
        assert_eq!(points.last().unwrap().risk, RiskScore::MAX);

        let points = project(120.0, RiskScore::clamped(10.0));
        assert_eq!(points.first().unwrap().risk, RiskScore::MIN);
    }
}
