use chrono::{DateTime, Utc};

use crate::core::primitives::f64_to_decimal;

use super::nice::decimals_for_spacing;

const SECOND_MILLIS: i64 = 1_000;
const DAY_MILLIS: i64 = 86_400 * SECOND_MILLIS;
const YEAR_MILLIS: i64 = 365 * DAY_MILLIS;

/// Formats a numeric tick using just enough decimals for the tick spacing.
///
/// Values go through `Decimal` so accumulated float noise such as
/// `0.30000000000000004` renders as `0.3`.
#[must_use]
pub fn format_numeric_tick_label(value: f64, spacing: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let decimals = decimals_for_spacing(spacing);
    match f64_to_decimal(value, "tick value") {
        Ok(decimal) => decimal.round_dp(decimals).normalize().to_string(),
        Err(_) => format!("{value:.prec$}", prec = decimals as usize),
    }
}

/// Picks a `chrono` pattern matching the resolution of the tick interval.
#[must_use]
pub fn time_label_pattern(interval_millis: i64) -> &'static str {
    if interval_millis < 60 * SECOND_MILLIS {
        "%H:%M:%S"
    } else if interval_millis < DAY_MILLIS {
        "%H:%M"
    } else if interval_millis < YEAR_MILLIS {
        "%Y-%m-%d"
    } else {
        "%Y"
    }
}

#[must_use]
pub fn format_time_tick_label(time: DateTime<Utc>, interval_millis: i64) -> String {
    time.format(time_label_pattern(interval_millis)).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{format_numeric_tick_label, format_time_tick_label};

    #[test]
    fn numeric_labels_strip_float_noise() {
        assert_eq!(format_numeric_tick_label(0.1 + 0.2, 0.1), "0.3");
        assert_eq!(format_numeric_tick_label(4.0, 2.0), "4");
        assert_eq!(format_numeric_tick_label(1.25, 0.25), "1.25");
        assert_eq!(format_numeric_tick_label(-0.0, 0.5), "0");
        assert_eq!(format_numeric_tick_label(f64::NAN, 1.0), "nan");
    }

    #[test]
    fn time_labels_follow_interval_resolution() {
        let time = Utc.with_ymd_and_hms(2024, 5, 6, 13, 45, 30).unwrap();
        assert_eq!(format_time_tick_label(time, 15_000), "13:45:30");
        assert_eq!(format_time_tick_label(time, 900_000), "13:45");
        assert_eq!(format_time_tick_label(time, 86_400_000), "2024-05-06");
        assert_eq!(format_time_tick_label(time, 365 * 86_400_000), "2024");
    }
}
