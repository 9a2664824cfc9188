//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ONCOBRIDGE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use oncobridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod charts;
mod error;
mod server;

pub use charts::{ChartConfig, MAX_CHART_DIMENSION, MIN_CHART_DIMENSION};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// service. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chart defaults (style and size)
    #[serde(default)]
    pub charts: ChartConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ONCOBRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Validates the result
    ///
    /// # Environment Variable Format
    ///
    /// - `ONCOBRIDGE__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `ONCOBRIDGE__CHARTS__STYLE=classic` -> `charts.style = classic`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    /// or fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ONCOBRIDGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.charts.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ChartStyle;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "ONCOBRIDGE__SERVER__PORT",
        "ONCOBRIDGE__SERVER__ENVIRONMENT",
        "ONCOBRIDGE__CHARTS__STYLE",
        "ONCOBRIDGE__CHARTS__WIDTH",
        "ONCOBRIDGE__CHARTS__HEIGHT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.charts.style, ChartStyle::Seaborn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ONCOBRIDGE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.server.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ONCOBRIDGE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_rejects_invalid_chart_dimension() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ONCOBRIDGE__CHARTS__HEIGHT", "50");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidChartDimension {
                name: "height",
                value: 50,
                ..
            }))
        ));
    }

    #[test]
    fn test_chart_section_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ONCOBRIDGE__CHARTS__STYLE", "classic");
        env::set_var("ONCOBRIDGE__CHARTS__WIDTH", "1024");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.charts.style, ChartStyle::Classic);
        assert_eq!(config.charts.width, 1024);
    }
}
