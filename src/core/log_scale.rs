use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::core::scale::{checked_unit, linear_ratio};
use crate::core::{DomainRange, Scale, ScaleKind};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Logarithmic scale over a strictly positive `f64` domain.
///
/// Log-space bounds are computed once at construction.
/// Deserialization goes through [`LogarithmicScale::with_options`], so the
/// log bounds are always derived rather than read back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogarithmicScaleFields")]
pub struct LogarithmicScale {
    domain: DomainRange<f64>,
    base: f64,
    clamp_to_domain: bool,
    #[serde(skip_serializing)]
    log_start: f64,
    #[serde(skip_serializing)]
    log_end: f64,
}

#[derive(Deserialize)]
struct LogarithmicScaleFields {
    domain: DomainRange<f64>,
    #[serde(default = "default_log_base")]
    base: f64,
    #[serde(default)]
    clamp_to_domain: bool,
}

fn default_log_base() -> f64 {
    DEFAULT_LOG_BASE
}

impl TryFrom<LogarithmicScaleFields> for LogarithmicScale {
    type Error = ChartError;

    fn try_from(fields: LogarithmicScaleFields) -> ChartResult<Self> {
        Self::with_options(
            fields.domain.start,
            fields.domain.end,
            fields.base,
            fields.clamp_to_domain,
        )
    }
}

impl LogarithmicScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        Self::with_options(domain_start, domain_end, DEFAULT_LOG_BASE, false)
    }

    pub fn with_options(
        domain_start: f64,
        domain_end: f64,
        base: f64,
        clamp_to_domain: bool,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "log scale domain must be finite".to_owned(),
            ));
        }
        if domain_start <= 0.0 || domain_end <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "log scale domain must be > 0, got [{domain_start}, {domain_end}]"
            )));
        }
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(ChartError::InvalidData(format!(
                "log base must be finite, > 0 and != 1, got {base}"
            )));
        }

        Ok(Self {
            domain: DomainRange::new(domain_start, domain_end),
            base,
            clamp_to_domain,
            log_start: log_with_base(domain_start, base),
            log_end: log_with_base(domain_end, base),
        })
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Precomputed `(log(start), log(end))` in the configured base.
    #[must_use]
    pub fn log_domain(&self) -> (f64, f64) {
        (self.log_start, self.log_end)
    }

    #[must_use]
    pub fn project_value(&self, value: f64) -> f64 {
        let (min, max) = self.domain.normalize();
        let value = if value.is_nan() {
            if !self.clamp_to_domain {
                return f64::NAN;
            }
            min
        } else if value <= 0.0 {
            if !self.clamp_to_domain {
                return f64::NAN;
            }
            if min > 0.0 { min } else { f64::MIN_POSITIVE }
        } else if self.clamp_to_domain {
            value.clamp(min, max)
        } else if !value.is_finite() {
            return f64::NAN;
        } else {
            value
        };

        linear_ratio(log_with_base(value, self.base), self.log_start, self.log_end)
    }
}

impl Scale for LogarithmicScale {
    type Domain = f64;

    fn kind(&self) -> ScaleKind {
        ScaleKind::Logarithmic
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
        let exponent = self.log_start + unit * (self.log_end - self.log_start);
        Ok(self.base.powf(exponent))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn log_with_base(value: f64, base: f64) -> f64 {
    if base == 10.0 {
        value.log10()
    } else if base == 2.0 {
        value.log2()
    } else {
        value.ln() / base.ln()
    }
}
