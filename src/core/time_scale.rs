use std::any::Any;

use chrono::{DateTime, Utc};

use crate::core::primitives::{unix_millis_to_datetime, unix_seconds_to_datetime};
use crate::core::scale::checked_unit;
use crate::core::{DomainRange, Scale, ScaleKind};
use crate::error::{ChartError, ChartResult};

/// Time axis scale over absolute UTC timestamps.
///
/// Projection works on millisecond offsets from the domain start, so
/// sub-millisecond precision is intentionally dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: DomainRange<DateTime<Utc>>,
    clamp_to_domain: bool,
}

impl TimeScale {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::with_clamp(start, end, false)
    }

    #[must_use]
    pub fn with_clamp(start: DateTime<Utc>, end: DateTime<Utc>, clamp_to_domain: bool) -> Self {
        Self {
            domain: DomainRange::new(start, end),
            clamp_to_domain,
        }
    }

    /// Builds a scale from unix timestamps expressed in (fractional) seconds.
    pub fn from_unix_seconds(start: f64, end: f64) -> ChartResult<Self> {
        Ok(Self::new(
            unix_seconds_to_datetime(start)?,
            unix_seconds_to_datetime(end)?,
        ))
    }

    #[must_use]
    pub fn span_millis(&self) -> i64 {
        self.domain.end.timestamp_millis() - self.domain.start.timestamp_millis()
    }

    #[must_use]
    pub fn project_time(&self, time: DateTime<Utc>) -> f64 {
        let time = if self.clamp_to_domain {
            let (min, max) = self.domain.normalize();
            time.clamp(min, max)
        } else {
            time
        };
        let span = self.span_millis();
        if span == 0 {
            return 0.0;
        }
        let offset = time.timestamp_millis() - self.domain.start.timestamp_millis();
        offset as f64 / span as f64
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    fn kind(&self) -> ScaleKind {
        ScaleKind::Time
    }

    fn clamp_to_domain(&self) -> bool {
        self.clamp_to_domain
    }

    fn domain(&self) -> &DomainRange<DateTime<Utc>> {
        &self.domain
    }

    fn project(&self, value: &DateTime<Utc>) -> ChartResult<f64> {
        Ok(self.project_time(*value))
    }

    fn unproject(&self, unit: f64) -> ChartResult<DateTime<Utc>> {
        let unit = checked_unit(unit, self.clamp_to_domain)?;
        let millis =
            self.domain.start.timestamp_millis() as f64 + unit * self.span_millis() as f64;
        if !(i64::MIN as f64..=i64::MAX as f64).contains(&millis) {
            return Err(ChartError::InvalidData(format!(
                "unit {unit} maps outside the supported time range"
            )));
        }
        unix_millis_to_datetime(millis.round() as i64)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::TimeScale;
    use crate::core::Scale;

    #[test]
    fn time_scale_projects_millisecond_offsets() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let scale = TimeScale::new(start, start + Duration::hours(1));
        let unit = scale.project_time(start + Duration::minutes(15));
        assert_eq!(unit, 0.25);
        assert_eq!(
            scale.unproject(0.5).expect("unproject"),
            start + Duration::minutes(30)
        );
    }

    #[test]
    fn zero_span_collapses_to_origin() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let scale = TimeScale::new(start, start);
        assert_eq!(scale.project_time(start + Duration::days(3)), 0.0);
    }

    #[test]
    fn clamped_time_scale_limits_projection() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let scale = TimeScale::with_clamp(start, start + Duration::days(1), true);
        assert_eq!(scale.project_time(start - Duration::days(1)), 0.0);
        assert_eq!(scale.project_time(start + Duration::days(2)), 1.0);
    }

    #[test]
    fn far_out_of_domain_unit_is_rejected_instead_of_overflowing() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let scale = TimeScale::new(start, start + Duration::days(365));
        assert!(scale.unproject(1.0e9).is_err());
        assert!(scale.unproject(-1.0e9).is_err());
        assert!(scale.unproject(f64::MAX).is_err());
        assert_eq!(
            scale.unproject(2.0).expect("two years out"),
            start + Duration::days(730)
        );
    }

    #[test]
    fn from_unix_seconds_rejects_non_finite_bounds() {
        assert!(TimeScale::from_unix_seconds(f64::NAN, 10.0).is_err());
        let scale = TimeScale::from_unix_seconds(0.0, 10.0).expect("valid");
        assert_eq!(scale.span_millis(), 10_000);
    }
}
