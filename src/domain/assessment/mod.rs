//! Assessment Module - Breast cancer risk scoring.
//!
//! Pure, synchronous domain services. Raw `PatientAttributes` must pass
//! `PatientProfile::validate` before anything else here will accept them.
//!
//! # Components
//!
//! - `PatientProfile` - Validated patient attributes
//! - `RiskScorer` - Additive rules over a base risk, clamped to 0-100
//! - `RiskCategory` - Four-tier categorization of a score
//! - `Advisor` - Ordered textual recommendations
//! - `RiskMetrics` - Percentile bucket, screening interval, urgency
//! - `Preset` - Named reference profiles
//! - `project` - Age-based risk projection for the timeline chart

mod advisor;
mod category;
mod metrics;
mod presets;
mod profile;
mod projection;
mod risk_assessment;
mod scorer;

pub use advisor::Advisor;
pub use category::{RiskCategory, HIGH_THRESHOLD, MODERATE_THRESHOLD, VERY_HIGH_THRESHOLD};
pub use metrics::{percentile_rank, screening_frequency_months, urgency, RiskMetrics};
pub use presets::Preset;
pub use profile::{BreastDensity, MenopausalStatus, PatientAttributes, PatientProfile};
pub use projection::{project, ProjectionPoint, PROJECTION_AGES};
pub use risk_assessment::RiskAssessment;
pub use scorer::{ContributingFactors, RiskFactor, RiskScorer, BASE_RISK};
