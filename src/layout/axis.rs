use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};

/// Side of the plot area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisOrientation {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct AxisLayoutRequestFields {
    orientation: AxisOrientation,
    thickness: f64,
    #[serde(default)]
    min_thickness: Option<f64>,
    #[serde(default)]
    max_thickness: Option<f64>,
}

/// Requested thickness for one axis.
///
/// The stored thickness is clamped into `[min, max]` when constructed, so it
/// always satisfies its own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisLayoutRequestFields")]
pub struct AxisLayoutRequest {
    orientation: AxisOrientation,
    thickness: f64,
    min_thickness: Option<f64>,
    max_thickness: Option<f64>,
}

impl AxisLayoutRequest {
    pub fn new(orientation: AxisOrientation, thickness: f64) -> ChartResult<Self> {
        Self::with_bounds(orientation, thickness, None, None)
    }

    pub fn with_bounds(
        orientation: AxisOrientation,
        thickness: f64,
        min_thickness: Option<f64>,
        max_thickness: Option<f64>,
    ) -> ChartResult<Self> {
        for (name, value) in [
            ("thickness", Some(thickness)),
            ("min_thickness", min_thickness),
            ("max_thickness", max_thickness),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "axis `{name}` must be finite and >= 0"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (min_thickness, max_thickness) {
            if min > max {
                return Err(ChartError::InvalidData(format!(
                    "axis min thickness {min} exceeds max thickness {max}"
                )));
            }
        }

        let mut clamped = thickness;
        if let Some(min) = min_thickness {
            clamped = clamped.max(min);
        }
        if let Some(max) = max_thickness {
            clamped = clamped.min(max);
        }

        Ok(Self {
            orientation,
            thickness: clamped,
            min_thickness,
            max_thickness,
        })
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[must_use]
    pub fn min_thickness(&self) -> Option<f64> {
        self.min_thickness
    }

    #[must_use]
    pub fn max_thickness(&self) -> Option<f64> {
        self.max_thickness
    }
}

impl TryFrom<AxisLayoutRequestFields> for AxisLayoutRequest {
    type Error = ChartError;

    fn try_from(fields: AxisLayoutRequestFields) -> ChartResult<Self> {
        Self::with_bounds(
            fields.orientation,
            fields.thickness,
            fields.min_thickness,
            fields.max_thickness,
        )
    }
}

/// Realized geometry for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub orientation: AxisOrientation,
    pub bounds: Rect,
    pub actual_thickness: f64,
}
