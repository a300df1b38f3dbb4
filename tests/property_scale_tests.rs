use chart_compose::core::{LinearScale, LogarithmicScale, Scale, TimeScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new(domain_start, domain_end).expect("valid scale");

        let unit = scale.project(&value).expect("project");
        let recovered = scale.unproject(unit).expect("unproject");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn log_scale_round_trip_property(
        domain_min_exp in -3.0f64..3.0,
        decades in 0.5f64..6.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_start = 10f64.powf(domain_min_exp);
        let domain_end = 10f64.powf(domain_min_exp + decades);
        let value = 10f64.powf(domain_min_exp + value_factor * decades);
        let scale = LogarithmicScale::new(domain_start, domain_end).expect("valid scale");

        let unit = scale.project(&value).expect("project");
        let recovered = scale.unproject(unit).expect("unproject");

        prop_assert!((recovered - value).abs() <= value * 1e-9);
    }

    #[test]
    fn time_scale_round_trip_property(
        start_seconds in -1_000_000_000i64..2_000_000_000,
        span_seconds in 1i64..100_000_000,
        offset_factor in 0.0f64..1.0
    ) {
        let scale = TimeScale::from_unix_seconds(
            start_seconds as f64,
            (start_seconds + span_seconds) as f64,
        )
        .expect("valid scale");
        let offset_seconds = (offset_factor * span_seconds as f64).floor() as i64;
        let value = scale.domain().start + chrono::Duration::seconds(offset_seconds);

        let unit = scale.project(&value).expect("project");
        let recovered = scale.unproject(unit).expect("unproject");

        prop_assert!((recovered - value).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn clamped_projection_is_idempotent(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.01f64..1_000.0,
        value in -1_000_000.0f64..1_000_000.0
    ) {
        let scale = LinearScale::with_clamp(domain_start, domain_start + domain_span, true)
            .expect("valid scale");

        let unit = scale.project(&value).expect("project");
        prop_assert!((0.0..=1.0).contains(&unit));

        let clamped_value = scale.unproject(unit).expect("unproject");
        let again = scale.project(&clamped_value).expect("project");
        prop_assert!((again - unit).abs() <= 1e-9);
    }
}
