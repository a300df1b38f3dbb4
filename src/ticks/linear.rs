use tracing::{trace, warn};

use crate::core::Scale;
use crate::error::{ChartError, ChartResult};

use super::label::format_numeric_tick_label;
use super::nice::nice_number;
use super::{AxisTick, TickGenerator};

const MAX_LINEAR_TICKS: usize = 10_000;
/// Keeps nice-number rounding (at most ~1.5x the target) under `MAX_LINEAR_TICKS`.
const MAX_TARGET_COUNT: usize = MAX_LINEAR_TICKS / 2;

/// "Nice number" tick generator for continuous numeric scales.
///
/// Ticks are computed in raw domain space and projected through the scale, so
/// the same generator serves linear and logarithmic scales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearTickGenerator;

impl LinearTickGenerator {
    /// Spacing chosen for a `[min, max]` domain and target tick count.
    #[must_use]
    pub fn spacing_for(min: f64, max: f64, target_count: usize) -> f64 {
        let raw_range = (max - min).abs();
        let nice_range = nice_number(raw_range, false);
        let target_spacing = nice_range / (target_count.saturating_sub(1).max(1) as f64);
        nice_number(target_spacing, true)
    }
}

impl TickGenerator<f64> for LinearTickGenerator {
    fn generate(
        &self,
        scale: &dyn Scale<Domain = f64>,
        target_count: usize,
    ) -> ChartResult<Vec<AxisTick<f64>>> {
        let (min, max) = scale.domain().normalize();
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "tick domain must be finite".to_owned(),
            ));
        }

        if min == max {
            let unit = scale.project(&min)?;
            return Ok(vec![AxisTick::new(
                min,
                unit,
                format_numeric_tick_label(min, 1.0),
            )]);
        }

        let effective_count = target_count.min(MAX_TARGET_COUNT);
        if effective_count < target_count {
            warn!(
                requested = target_count,
                effective = effective_count,
                "linear tick target count capped"
            );
        }
        let spacing = Self::spacing_for(min, max, effective_count);
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "cannot derive tick spacing for domain [{min}, {max}]"
            )));
        }

        let first_index = (min / spacing).floor();
        let nice_max = (max / spacing).ceil() * spacing;
        let epsilon = spacing * 0.5;

        let mut ticks = Vec::new();
        let mut reached_nice_max = false;
        for step in 0..MAX_LINEAR_TICKS {
            let value = (first_index + step as f64) * spacing;
            if value > nice_max + epsilon {
                reached_nice_max = true;
                break;
            }
            let unit = scale.project(&value)?;
            if !unit.is_finite() {
                continue;
            }
            ticks.push(AxisTick::new(
                value,
                unit,
                format_numeric_tick_label(value, spacing),
            ));
        }

        if !reached_nice_max {
            warn!(
                min,
                max,
                spacing,
                limit = MAX_LINEAR_TICKS,
                "linear tick generation stopped before the domain end"
            );
        }

        trace!(
            min,
            max,
            spacing,
            count = ticks.len(),
            kind = ?scale.kind(),
            "generated linear ticks"
        );
        Ok(ticks)
    }
}
