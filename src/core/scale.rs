use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::core::DomainRange;
use crate::error::{ChartError, ChartResult};

/// Scale family, used together with the domain type to resolve tick generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    Linear,
    Logarithmic,
    Time,
    Ordinal,
}

/// Projects typed domain values into normalized unit space `[0, 1]` and back.
///
/// Implementations are immutable after construction and may be shared across
/// threads. Numeric scales report non-finite input as `NaN` from [`Scale::project`];
/// only membership-based scales fail there.
pub trait Scale: Send + Sync + 'static {
    type Domain: 'static;

    fn kind(&self) -> ScaleKind;

    fn clamp_to_domain(&self) -> bool;

    fn domain(&self) -> &DomainRange<Self::Domain>;

    /// Maps a domain value to unit space.
    fn project(&self, value: &Self::Domain) -> ChartResult<f64>;

    /// Non-failing projection; `None` when the value has no finite unit position.
    fn try_project(&self, value: &Self::Domain) -> Option<f64> {
        self.project(value).ok().filter(|unit| unit.is_finite())
    }

    /// Maps a finite unit coordinate back to the domain.
    fn unproject(&self, unit: f64) -> ChartResult<Self::Domain>;

    fn as_any(&self) -> &dyn Any;

    #[must_use]
    fn domain_type(&self) -> &'static str {
        std::any::type_name::<Self::Domain>()
    }
}

pub(crate) fn checked_unit(unit: f64, clamp_to_domain: bool) -> ChartResult<f64> {
    if !unit.is_finite() {
        return Err(ChartError::InvalidData(
            "unit coordinate must be finite".to_owned(),
        ));
    }
    Ok(if clamp_to_domain {
        unit.clamp(0.0, 1.0)
    } else {
        unit
    })
}

/// Shared ratio used by every continuous scale.
pub(crate) fn linear_ratio(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.abs() <= f64::EPSILON * start.abs().max(end.abs()).max(1.0) {
        return 0.0;
    }
    (value - start) / span
}

/// Continuous scale over raw `f64` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearScaleFields")]
pub struct LinearScale {
    domain: DomainRange<f64>,
    clamp_to_domain: bool,
}

#[derive(Deserialize)]
struct LinearScaleFields {
    domain: DomainRange<f64>,
    #[serde(default)]
    clamp_to_domain: bool,
}

impl TryFrom<LinearScaleFields> for LinearScale {
    type Error = ChartError;

    fn try_from(fields: LinearScaleFields) -> ChartResult<Self> {
        Self::with_clamp(fields.domain.start, fields.domain.end, fields.clamp_to_domain)
    }
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        Self::with_clamp(domain_start, domain_end, false)
    }

    pub fn with_clamp(domain_start: f64, domain_end: f64, clamp_to_domain: bool) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain: DomainRange::new(domain_start, domain_end),
            clamp_to_domain,
        })
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        linear_ratio(self.domain.end, self.domain.start, self.domain.end) == 0.0
    }

    #[must_use]
    pub fn project_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            return if self.clamp_to_domain { 0.0 } else { f64::NAN };
        }
        if !value.is_finite() && !self.clamp_to_domain {
            return f64::NAN;
        }
        let value = if self.clamp_to_domain {
            let (min, max) = self.domain.normalize();
            value.clamp(min, max)
        } else {
            value
        };
        linear_ratio(value, self.domain.start, self.domain.end)
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }

    fn clamp_to_domain(&self) -> bool {
        self.clamp_to_domain
    }

    fn domain(&self) -> &DomainRange<f64> {
        &self.domain
    }

    fn project(&self, value: &f64) -> ChartResult<f64> {
        Ok(self.project_value(*value))
    }

    fn unproject(&self, unit: f64) -> ChartResult<f64> {
        let unit = checked_unit(unit, self.clamp_to_domain)?;
        Ok(self.domain.start + unit * (self.domain.end - self.domain.start))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, Scale};

    #[test]
    fn linear_projection_is_not_clamped_by_default() {
        let scale = LinearScale::new(0.0, 10.0).expect("valid scale");
        assert_eq!(scale.project_value(15.0), 1.5);
        assert_eq!(scale.project_value(-5.0), -0.5);
    }

    #[test]
    fn clamped_projection_stays_in_unit_space() {
        let scale = LinearScale::with_clamp(0.0, 10.0, true).expect("valid scale");
        assert_eq!(scale.project_value(15.0), 1.0);
        assert_eq!(scale.unproject(2.0).expect("unproject"), 10.0);
    }

    #[test]
    fn degenerate_domain_projects_to_zero() {
        let scale = LinearScale::new(5.0, 5.0).expect("zero span is allowed");
        assert!(scale.is_degenerate());
        assert_eq!(scale.project_value(5.0), 0.0);
        assert_eq!(scale.project_value(100.0), 0.0);
    }

    #[test]
    fn non_finite_input_projects_to_nan_without_clamping() {
        let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
        assert!(scale.project_value(f64::NAN).is_nan());
        assert!(scale.try_project(&f64::INFINITY).is_none());
        assert!(scale.unproject(f64::NAN).is_err());
    }

    #[test]
    fn deserialization_applies_domain_validation() {
        let scale: LinearScale =
            serde_json::from_str(r#"{"domain":{"start":0.0,"end":10.0}}"#).expect("valid scale");
        assert!(!scale.clamp_to_domain());
        assert_eq!(scale.project_value(5.0), 0.5);
        assert!(
            serde_json::from_str::<LinearScale>(r#"{"domain":{"start":0.0,"end":1e999}}"#)
                .is_err()
        );
    }

    #[test]
    fn reversed_domain_round_trips() {
        let scale = LinearScale::new(100.0, 0.0).expect("valid scale");
        let unit = scale.project_value(25.0);
        assert!((unit - 0.75).abs() <= 1e-12);
        assert!((scale.unproject(unit).expect("unproject") - 25.0).abs() <= 1e-9);
    }
}
