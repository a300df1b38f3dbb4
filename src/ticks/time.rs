use chrono::{DateTime, Utc};
use tracing::trace;

use crate::core::Scale;
use crate::core::primitives::unix_millis_to_datetime;
use crate::error::ChartResult;

use super::label::format_time_tick_label;
use super::{AxisTick, TickGenerator};

const SECOND_MILLIS: i64 = 1_000;
const DAY_SECONDS: i64 = 86_400;
const YEAR_SECONDS: i64 = 365 * DAY_SECONDS;

/// Ascending "human" tick intervals. Day, month and year buckets are fixed
/// widths (30/90/180/365 days) and ignore calendar irregularities.
pub const HUMAN_TIME_INTERVALS_SECONDS: [i64; 20] = [
    1,
    5,
    15,
    30,
    60,
    5 * 60,
    15 * 60,
    30 * 60,
    3_600,
    3 * 3_600,
    6 * 3_600,
    12 * 3_600,
    DAY_SECONDS,
    2 * DAY_SECONDS,
    7 * DAY_SECONDS,
    14 * DAY_SECONDS,
    30 * DAY_SECONDS,
    90 * DAY_SECONDS,
    180 * DAY_SECONDS,
    YEAR_SECONDS,
];

/// Tick generator for [`crate::core::TimeScale`] domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeTickGenerator;

impl TimeTickGenerator {
    /// Interval, in milliseconds, for a domain span and target tick count.
    ///
    /// Picks the first table interval producing at most `1.5 × target_count`
    /// ticks, else a whole number of 365-day years.
    #[must_use]
    pub fn select_interval_millis(span_millis: i64, target_count: usize) -> i64 {
        let span = span_millis.unsigned_abs() as f64;
        let target = target_count.max(1) as f64;
        let limit = target * 1.5;

        for seconds in HUMAN_TIME_INTERVALS_SECONDS {
            let interval = (seconds * SECOND_MILLIS) as f64;
            if span / interval <= limit {
                return seconds * SECOND_MILLIS;
            }
        }

        let span_days = span / (DAY_SECONDS * SECOND_MILLIS) as f64;
        let years = (span_days / 365.0 / target).round().max(1.0) as i64;
        years.saturating_mul(YEAR_SECONDS * SECOND_MILLIS)
    }
}

impl TickGenerator<DateTime<Utc>> for TimeTickGenerator {
    fn generate(
        &self,
        scale: &dyn Scale<Domain = DateTime<Utc>>,
        target_count: usize,
    ) -> ChartResult<Vec<AxisTick<DateTime<Utc>>>> {
        let (start, end) = scale.domain().normalize();
        let start_millis = start.timestamp_millis();
        let end_millis = end.timestamp_millis();

        if start_millis == end_millis {
            let unit = scale.project(&start)?;
            return Ok(vec![AxisTick::new(
                start,
                unit,
                format_time_tick_label(start, SECOND_MILLIS),
            )]);
        }

        let interval = Self::select_interval_millis(end_millis - start_millis, target_count);
        let remainder = start_millis.rem_euclid(interval);
        let first = if remainder == 0 {
            start_millis
        } else {
            start_millis + (interval - remainder)
        };

        let mut ticks = Vec::new();
        let mut cursor = first;
        while cursor <= end_millis {
            if cursor >= start_millis {
                let time = unix_millis_to_datetime(cursor)?;
                let unit = scale.project(&time)?;
                ticks.push(AxisTick::new(
                    time,
                    unit,
                    format_time_tick_label(time, interval),
                ));
            }
            let Some(next) = cursor.checked_add(interval) else {
                break;
            };
            cursor = next;
        }

        trace!(
            interval_millis = interval,
            count = ticks.len(),
            "generated time ticks"
        );
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::TimeTickGenerator;
    use crate::core::TimeScale;
    use crate::ticks::TickGenerator;

    #[test]
    fn hour_span_selects_fifteen_minute_interval() {
        let interval = TimeTickGenerator::select_interval_millis(3_600_000, 6);
        assert_eq!(interval, 15 * 60 * 1_000);
    }

    #[test]
    fn hour_span_emits_five_aligned_ticks() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let scale = TimeScale::new(start, start + Duration::minutes(60));
        let ticks = TimeTickGenerator.generate(&scale, 6).expect("ticks");
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["09:00", "09:15", "09:30", "09:45", "10:00"]);
        assert_eq!(ticks[2].unit_position, 0.5);
    }

    #[test]
    fn first_tick_aligns_forward_to_boundary() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 7, 0).unwrap();
        let scale = TimeScale::new(start, start + Duration::minutes(60));
        let ticks = TimeTickGenerator.generate(&scale, 6).expect("ticks");
        assert_eq!(
            ticks.first().map(|tick| tick.value),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 9, 15, 0).unwrap())
        );
        assert_eq!(ticks.len(), 4);
    }

    #[test]
    fn multi_decade_span_falls_back_to_year_multiples() {
        let span_millis = 100 * 365 * 86_400_000_i64;
        let interval = TimeTickGenerator::select_interval_millis(span_millis, 6);
        assert_eq!(interval, 17 * 365 * 86_400_000_i64);
    }

    #[test]
    fn degenerate_time_domain_emits_single_tick() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let ticks = TimeTickGenerator
            .generate(&TimeScale::new(start, start), 6)
            .expect("ticks");
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].value, start);
    }
}
