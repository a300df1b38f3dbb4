use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::layout::AxisLayoutRequest;
use crate::style::ChartTheme;
use crate::ticks::DEFAULT_TICK_COUNT;

/// Inputs shared by every run of a [`ChartLayoutPass`](super::ChartLayoutPass).
///
/// Explicit `axis_requests` take precedence over the thickness estimated
/// from tick labels for the same orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPassConfig {
    pub device_pixel_ratio: f64,
    pub tick_target_count: usize,
    pub axis_requests: Vec<AxisLayoutRequest>,
    pub theme: ChartTheme,
}

impl Default for LayoutPassConfig {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            tick_target_count: DEFAULT_TICK_COUNT,
            axis_requests: Vec::new(),
            theme: ChartTheme::default(),
        }
    }
}

impl LayoutPassConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "config `device_pixel_ratio` must be finite and > 0".to_owned(),
            ));
        }
        if self.tick_target_count == 0 {
            return Err(ChartError::InvalidData(
                "config `tick_target_count` must be >= 1".to_owned(),
            ));
        }
        Ok(Self {
            theme: self.theme.validate()?,
            ..self
        })
    }
}
