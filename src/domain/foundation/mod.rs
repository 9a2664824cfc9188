//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! OncoBridge domain.

mod errors;
mod risk_score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use risk_score::{round2, RiskScore};
