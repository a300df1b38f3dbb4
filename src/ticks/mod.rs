//! Tick generation for every scale family.
//!
//! Generators are stateless strategies resolved through
//! [`TickGeneratorRegistry`] by `(ScaleKind, domain type)`.

mod label;
mod linear;
mod nice;
mod ordinal;
mod registry;
mod time;

pub use label::{format_numeric_tick_label, format_time_tick_label, time_label_pattern};
pub use linear::LinearTickGenerator;
pub use nice::{decimals_for_spacing, nice_number};
pub use ordinal::OrdinalTickGenerator;
pub use registry::TickGeneratorRegistry;
pub use time::{HUMAN_TIME_INTERVALS_SECONDS, TimeTickGenerator};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Scale;
use crate::error::ChartResult;

pub const DEFAULT_TICK_COUNT: usize = 6;

/// One labeled reference point on an axis, in domain and unit coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick<T> {
    pub value: T,
    pub unit_position: f64,
    pub label: String,
}

impl<T> AxisTick<T> {
    #[must_use]
    pub fn new(value: T, unit_position: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            unit_position,
            label: label.into(),
        }
    }
}

/// Strategy producing representative ticks for a scale.
pub trait TickGenerator<T>: Send + Sync {
    fn generate(
        &self,
        scale: &dyn Scale<Domain = T>,
        target_count: usize,
    ) -> ChartResult<Vec<AxisTick<T>>>;
}

/// Tick closest to `unit` in unit space. Ties resolve to the earlier tick.
///
/// Renderers use this to honour an annotation's snap mode; annotations keep
/// their raw coordinates.
#[must_use]
pub fn nearest_tick<T>(ticks: &[AxisTick<T>], unit: f64) -> Option<&AxisTick<T>> {
    if !unit.is_finite() {
        return None;
    }
    ticks
        .iter()
        .filter(|tick| tick.unit_position.is_finite())
        .min_by_key(|tick| OrderedFloat((tick.unit_position - unit).abs()))
}
