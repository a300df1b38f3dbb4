use std::fmt;
use std::marker::PhantomData;

use crate::core::{OrdinalScale, Scale};
use crate::error::{ChartError, ChartResult};

use super::{AxisTick, TickGenerator};

/// Emits one tick per category, in declared order.
///
/// The target count is ignored: categorical axes never skip categories.
pub struct OrdinalTickGenerator<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> OrdinalTickGenerator<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for OrdinalTickGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrdinalTickGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdinalTickGenerator")
    }
}

impl<T> TickGenerator<T> for OrdinalTickGenerator<T>
where
    T: Clone + fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    fn generate(
        &self,
        scale: &dyn Scale<Domain = T>,
        _target_count: usize,
    ) -> ChartResult<Vec<AxisTick<T>>> {
        let Some(ordinal) = scale.as_any().downcast_ref::<OrdinalScale<T>>() else {
            return Err(ChartError::IncompatibleScale {
                expected: "OrdinalScale",
                found: scale.kind(),
            });
        };

        Ok(ordinal
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| {
                AxisTick::new(
                    category.clone(),
                    ordinal.unit_for_index(index),
                    category.to_string(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::OrdinalTickGenerator;
    use crate::core::{LinearScale, OrdinalScale};
    use crate::error::ChartError;
    use crate::ticks::TickGenerator;

    #[test]
    fn one_tick_per_category_in_declared_order() {
        let scale = OrdinalScale::new(["north", "east", "south"]).expect("valid scale");
        let ticks = OrdinalTickGenerator::new().generate(&scale, 10).expect("ticks");
        let units: Vec<f64> = ticks.iter().map(|tick| tick.unit_position).collect();
        assert_eq!(units, vec![0.0, 0.5, 1.0]);
        assert_eq!(ticks[1].label, "east");
    }

    #[test]
    fn non_ordinal_scale_is_a_contract_violation() {
        let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
        let result = OrdinalTickGenerator::<f64>::new().generate(&scale, 6);
        assert!(matches!(result, Err(ChartError::IncompatibleScale { .. })));
    }
}
