//! Prometheus metrics for allocation outcomes.
//!
//! Metrics are recorded through the `metrics` facade and rendered by the
//! `/metrics` handler from the installed [`PrometheusHandle`]. Recording is a
//! no-op until [`install`] has run.

use metrics::{Unit, counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

pub const REQUESTS_TOTAL: &str = "shortener_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "shortener_request_duration_seconds";
pub const ALLOCATION_ATTEMPTS: &str = "shortener_allocation_attempts";
pub const COLLISIONS_TOTAL: &str = "shortener_collisions_total";

const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];
const ATTEMPT_BUCKETS: &[f64] = &[1.0, 2.0, 3.0, 5.0, 10.0, 25.0, 50.0, 100.0];

/// Global recorder, installed once per process.
static RECORDER: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    #[error("failed to install metrics recorder: {0}")]
    Install(String),
}

/// Installs the Prometheus recorder and returns a handle for rendering.
///
/// Repeated calls return the handle from the first installation.
///
/// # Errors
///
/// Returns [`MetricsError::Install`] if another global recorder is already
/// registered or the bucket configuration is rejected.
pub fn install() -> Result<PrometheusHandle, MetricsError> {
    RECORDER
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .set_buckets_for_metric(
                    Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
                    DURATION_BUCKETS,
                )
                .and_then(|builder| {
                    builder.set_buckets_for_metric(
                        Matcher::Full(ALLOCATION_ATTEMPTS.to_string()),
                        ATTEMPT_BUCKETS,
                    )
                })
                .and_then(PrometheusBuilder::install_recorder)
                .map_err(|e| e.to_string())?;

            describe();
            Ok(handle)
        })
        .clone()
        .map_err(MetricsError::Install)
}

fn describe() {
    describe_counter!(REQUESTS_TOTAL, "Total shorten requests by result");
    describe_histogram!(
        REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "Shorten request duration by result"
    );
    describe_histogram!(
        ALLOCATION_ATTEMPTS,
        Unit::Count,
        "Store reservations issued per allocation"
    );
    describe_counter!(
        COLLISIONS_TOTAL,
        "Candidate codes rejected because they were already taken"
    );
}

/// Records one shorten request under its result label.
pub fn record_request(result: &'static str, elapsed: Duration) {
    counter!(REQUESTS_TOTAL, "result" => result).increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "result" => result).record(elapsed.as_secs_f64());
}

pub fn record_collision() {
    counter!(COLLISIONS_TOTAL).increment(1);
}

pub fn record_attempts(attempts: usize) {
    histogram!(ALLOCATION_ATTEMPTS).record(attempts as f64);
}
