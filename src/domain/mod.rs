//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (risk score, errors)
//! - `assessment` - Validation, scoring, categorization, advice and metrics

pub mod assessment;
pub mod foundation;
