//! Opt-in `tracing` output for hosts embedding `chart-compose`.
//!
//! Layout passes log pass summaries at `debug` and generator details at
//! `trace`. Hosts with their own subscriber can ignore this module.

/// Default directive when `RUST_LOG` is unset or invalid.
#[cfg(feature = "telemetry")]
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber already exists.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Always `false`: built without the `telemetry` feature.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::init_default_tracing;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_init_is_a_no_op_without_feature() {
        assert!(!init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_tracing_init_reports_existing_subscriber() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
