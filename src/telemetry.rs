//! Opt-in log output for the scale calculator.
//!
//! `ScaleCalculator::calculate` emits `tracing` events under the `chart_scale`
//! target: `debug` for each computed scale, `trace` for the rough estimate and
//! `warn` when a request is rejected or degenerates. Hosts that already run a
//! subscriber see those events without calling anything here.

/// Environment variable read by [`init_scale_tracing`] for a filter directive.
pub const SCALE_LOG_ENV: &str = "CHART_SCALE_LOG";

/// Directive used when [`SCALE_LOG_ENV`] is unset or blank.
pub const DEFAULT_SCALE_LOG_DIRECTIVE: &str = "chart_scale=warn";

/// Picks the filter directive from an optional override.
#[must_use]
pub fn scale_log_directive(overridden: Option<&str>) -> &str {
    match overridden.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive,
        _ => DEFAULT_SCALE_LOG_DIRECTIVE,
    }
}

/// Installs a compact global subscriber filtered by [`SCALE_LOG_ENV`].
///
/// Returns `false` when the `telemetry` feature is disabled, when the directive
/// does not parse, or when the host already installed a global subscriber.
#[must_use]
pub fn init_scale_tracing() -> bool {
    let overridden = std::env::var(SCALE_LOG_ENV).ok();
    init_scale_tracing_with(scale_log_directive(overridden.as_deref()))
}

/// Same as [`init_scale_tracing`] with an explicit filter directive.
#[must_use]
pub fn init_scale_tracing_with(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directive) else {
            return false;
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
