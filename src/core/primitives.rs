use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{ChartError, ChartResult};

pub fn f64_to_decimal(value: f64, field_name: &str) -> ChartResult<Decimal> {
    Decimal::from_f64_retain(value).ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp seconds must be finite".to_owned(),
        ));
    }
    unix_millis_to_datetime((seconds * 1000.0).round() as i64)
}

pub fn unix_millis_to_datetime(millis: i64) -> ChartResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {millis}ms is outside the supported range"))
    })
}
