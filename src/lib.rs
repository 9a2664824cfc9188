//! OncoBridge - Breast Cancer Risk Assessment Service
//!
//! This crate scores a patient profile against a fixed set of additive
//! heuristic rules, maps the score to a risk tier with recommendations and
//! secondary metrics, and serves results and charts over HTTP.
//!
//! The scores are synthetic and not a clinical probability.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
