//! Metrics collection and exposition.
//!
//! # Metrics
//! - `wds_requests_total` (counter): requests by method and outcome
//! - `wds_request_duration_seconds` (histogram): handling latency by method

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::dav::RequestOutcome;

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(method: &str, outcome: RequestOutcome, start: Instant) {
    let method = method.to_string();
    metrics::counter!(
        "wds_requests_total",
        "method" => method.clone(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!("wds_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
