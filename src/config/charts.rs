//! Chart rendering configuration

use serde::Deserialize;

use crate::ports::{ChartOptions, ChartStyle};

use super::error::ValidationError;

/// Smallest accepted chart dimension, in pixels.
pub const MIN_CHART_DIMENSION: u32 = 100;
/// Largest accepted chart dimension, in pixels.
pub const MAX_CHART_DIMENSION: u32 = 4000;

/// Default styling and size for rendered charts
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Theme used when a request does not pick one
    #[serde(default)]
    pub style: ChartStyle,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl ChartConfig {
    /// Rendering options built from this configuration
    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            style: self.style,
            width: self.width,
            height: self.height,
        }
    }

    /// Validate chart configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}

fn check_dimension(name: &'static str, value: u32) -> Result<(), ValidationError> {
    if (MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidChartDimension {
            name,
            value,
            min: MIN_CHART_DIMENSION,
            max: MAX_CHART_DIMENSION,
        })
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    400
}
