use chrono::{DateTime, Utc};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::{LinearScale, LogarithmicScale, OrdinalScale, ScaleKind, TimeScale};
use crate::error::ChartResult;
use crate::layout::AxisOrientation;
use crate::ticks::{AxisTick, TickGeneratorRegistry};

/// Scale driving one axis.
#[derive(Debug, Clone)]
pub enum AxisScale {
    Linear(LinearScale),
    Logarithmic(LogarithmicScale),
    Time(TimeScale),
    Ordinal(OrdinalScale<String>),
}

impl AxisScale {
    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Logarithmic(_) => ScaleKind::Logarithmic,
            Self::Time(_) => ScaleKind::Time,
            Self::Ordinal(_) => ScaleKind::Ordinal,
        }
    }

    /// Generates ticks with numeric values: raw values for numeric scales,
    /// unix seconds for time scales and category index for ordinal scales.
    pub fn numeric_ticks(
        &self,
        registry: &TickGeneratorRegistry,
        target_count: usize,
    ) -> ChartResult<Vec<AxisTick<f64>>> {
        match self {
            Self::Linear(scale) => registry.generate::<f64>(scale, target_count),
            Self::Logarithmic(scale) => registry.generate::<f64>(scale, target_count),
            Self::Time(scale) => Ok(registry
                .generate::<DateTime<Utc>>(scale, target_count)?
                .into_iter()
                .map(|tick| {
                    AxisTick::new(
                        datetime_to_unix_seconds(tick.value),
                        tick.unit_position,
                        tick.label,
                    )
                })
                .collect()),
            Self::Ordinal(scale) => Ok(registry
                .generate::<String>(scale, target_count)?
                .into_iter()
                .enumerate()
                .map(|(index, tick)| AxisTick::new(index as f64, tick.unit_position, tick.label))
                .collect()),
        }
    }
}

impl From<LinearScale> for AxisScale {
    fn from(scale: LinearScale) -> Self {
        Self::Linear(scale)
    }
}

impl From<LogarithmicScale> for AxisScale {
    fn from(scale: LogarithmicScale) -> Self {
        Self::Logarithmic(scale)
    }
}

impl From<TimeScale> for AxisScale {
    fn from(scale: TimeScale) -> Self {
        Self::Time(scale)
    }
}

impl From<OrdinalScale<String>> for AxisScale {
    fn from(scale: OrdinalScale<String>) -> Self {
        Self::Ordinal(scale)
    }
}

/// Axis declaration for a layout pass; thickness is estimated from labels.
#[derive(Debug, Clone)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub scale: AxisScale,
    pub min_thickness: Option<f64>,
    pub max_thickness: Option<f64>,
}

impl AxisSpec {
    #[must_use]
    pub fn new(orientation: AxisOrientation, scale: impl Into<AxisScale>) -> Self {
        Self {
            orientation,
            scale: scale.into(),
            min_thickness: None,
            max_thickness: None,
        }
    }

    #[must_use]
    pub fn with_thickness_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_thickness = min;
        self.max_thickness = max;
        self
    }
}
