//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ping_requests_total` (counter): requests by method, path, status
//! - `ping_request_duration_seconds` (histogram): latency by method, path
//! - `ping_validation_failures_total` (counter): rejected requests by type

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let path = path.to_string();

    counter!(
        "ping_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "ping_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a request rejected by the validation step.
pub fn record_validation_failure(request: &'static str) {
    counter!("ping_validation_failures_total", "request" => request).increment(1);
}
